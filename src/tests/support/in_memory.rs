//! Repository and storage doubles backed by shared memory.
//!
//! Each is `Clone` over the same store, so a test can hand one clone to a
//! service and keep another to inspect what was written.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::about::application::domain::About;
use crate::about::application::ports::outgoing::{AboutRepository, AboutRepositoryError};
use crate::contact::application::domain::Contact;
use crate::contact::application::ports::outgoing::{ContactRepository, ContactRepositoryError};
use crate::experience::application::domain::ExperienceSection;
use crate::experience::application::ports::outgoing::{
    ExperienceRepository, ExperienceRepositoryError,
};
use crate::media::application::ports::outgoing::{FileStorage, FileStorageError, StoredObject};
use crate::profile::application::domain::Profile;
use crate::profile::application::ports::outgoing::{ProfileRepository, ProfileRepositoryError};
use crate::project::application::domain::Project;
use crate::project::application::ports::outgoing::{ProjectRepository, ProjectRepositoryError};
use crate::shared::list_ids::compare_list_ids;

// ============================================================================
// Singleton rows
// ============================================================================

#[derive(Clone, Default)]
pub struct InMemoryProfileRepository {
    row: Arc<Mutex<Option<Profile>>>,
}

impl InMemoryProfileRepository {
    pub fn with(profile: Profile) -> Self {
        Self {
            row: Arc::new(Mutex::new(Some(profile))),
        }
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn fetch_profile(&self) -> Result<Option<Profile>, ProfileRepositoryError> {
        Ok(self.row.lock().unwrap().clone())
    }

    async fn upsert_profile(&self, profile: &Profile) -> Result<(), ProfileRepositoryError> {
        *self.row.lock().unwrap() = Some(profile.clone());
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryAboutRepository {
    row: Arc<Mutex<Option<About>>>,
}

impl InMemoryAboutRepository {
    pub fn with(about: About) -> Self {
        Self {
            row: Arc::new(Mutex::new(Some(about))),
        }
    }
}

#[async_trait]
impl AboutRepository for InMemoryAboutRepository {
    async fn fetch_about(&self) -> Result<Option<About>, AboutRepositoryError> {
        Ok(self.row.lock().unwrap().clone())
    }

    async fn upsert_about(&self, about: &About) -> Result<(), AboutRepositoryError> {
        *self.row.lock().unwrap() = Some(about.clone());
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryContactRepository {
    row: Arc<Mutex<Option<Contact>>>,
}

impl InMemoryContactRepository {
    pub fn with(contact: Contact) -> Self {
        Self {
            row: Arc::new(Mutex::new(Some(contact))),
        }
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn fetch_contact(&self) -> Result<Option<Contact>, ContactRepositoryError> {
        Ok(self.row.lock().unwrap().clone())
    }

    async fn upsert_contact(&self, contact: &Contact) -> Result<(), ContactRepositoryError> {
        *self.row.lock().unwrap() = Some(contact.clone());
        Ok(())
    }
}

// ============================================================================
// Lists
// ============================================================================

/// Items come back ordered by id, as the Postgres adapter returns them.
#[derive(Clone, Default)]
pub struct InMemoryExperienceRepository {
    section: Arc<Mutex<Option<ExperienceSection>>>,
}

impl InMemoryExperienceRepository {
    pub fn with(section: ExperienceSection) -> Self {
        Self {
            section: Arc::new(Mutex::new(Some(section))),
        }
    }
}

#[async_trait]
impl ExperienceRepository for InMemoryExperienceRepository {
    async fn fetch_section(&self) -> Result<Option<ExperienceSection>, ExperienceRepositoryError> {
        Ok(self.section.lock().unwrap().clone().map(|mut section| {
            section.experiences.sort_by(|a, b| compare_list_ids(&a.id, &b.id));
            section
        }))
    }

    async fn replace_section(
        &self,
        section: &ExperienceSection,
    ) -> Result<(), ExperienceRepositoryError> {
        *self.section.lock().unwrap() = Some(section.clone());
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct InMemoryProjectRepository {
    rows: Arc<Mutex<Vec<Project>>>,
}

impl InMemoryProjectRepository {
    pub fn with(projects: Vec<Project>) -> Self {
        Self {
            rows: Arc::new(Mutex::new(projects)),
        }
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn fetch_all(&self) -> Result<Vec<Project>, ProjectRepositoryError> {
        let mut projects = self.rows.lock().unwrap().clone();
        projects.sort_by(|a, b| compare_list_ids(&a.id, &b.id));
        Ok(projects)
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<Project>, ProjectRepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn replace_all(&self, projects: &[Project]) -> Result<(), ProjectRepositoryError> {
        *self.rows.lock().unwrap() = projects.to_vec();
        Ok(())
    }
}

// ============================================================================
// File storage
// ============================================================================

#[derive(Default)]
pub struct InMemoryFileStorage {
    objects: Mutex<Vec<StoredObject>>,
    failure: Option<FileStorageError>,
}

impl InMemoryFileStorage {
    pub fn failing(error: FileStorageError) -> Self {
        Self {
            objects: Mutex::new(Vec::new()),
            failure: Some(error),
        }
    }

    pub fn objects(&self) -> Vec<StoredObject> {
        self.objects.lock().unwrap().clone()
    }
}

#[async_trait]
impl FileStorage for InMemoryFileStorage {
    async fn put(&self, object: StoredObject) -> Result<(), FileStorageError> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        self.objects.lock().unwrap().push(object);
        Ok(())
    }

    fn public_url(&self, bucket: &str, name: &str) -> String {
        format!("memory://{bucket}/{name}")
    }
}
