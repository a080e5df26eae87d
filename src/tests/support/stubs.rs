use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::about::application::domain::About;
use crate::about::application::ports::incoming::use_cases::{
    GetAboutError, GetAboutUseCase, SaveAboutError, SaveAboutUseCase,
};
use crate::auth::application::use_cases::login_admin::{
    LoginAdminError, LoginAdminResponse, LoginAdminUseCase, LoginRequest,
};
use crate::contact::application::domain::Contact;
use crate::contact::application::ports::incoming::use_cases::{
    GetContactError, GetContactUseCase, SaveContactError, SaveContactUseCase,
};
use crate::experience::application::domain::ExperienceSection;
use crate::experience::application::ports::incoming::use_cases::{
    GetExperienceError, GetExperienceUseCase, SaveExperienceError, SaveExperienceUseCase,
};
use crate::mail::application::domain::ContactMessage;
use crate::mail::application::ports::incoming::use_cases::{
    SendContactMessageError, SendContactMessageUseCase,
};
use crate::mail::application::ports::outgoing::{
    DeliveryReceipt, EmailSender, EmailSenderError, OutgoingEmail,
};
use crate::media::application::ports::incoming::use_cases::{
    UploadFileCommand, UploadFileError, UploadFileUseCase, UploadedFile,
};
use crate::profile::application::domain::Profile;
use crate::profile::application::ports::incoming::use_cases::{
    GetProfileError, GetProfileUseCase, SaveProfileError, SaveProfileUseCase,
};
use crate::project::application::domain::Project;
use crate::project::application::ports::incoming::use_cases::{
    GetProjectsError, GetProjectsUseCase, GetSingleProjectError, GetSingleProjectUseCase,
    SaveProjectsError, SaveProjectsUseCase,
};
use crate::revalidation::application::domain::reported_paths;
use crate::revalidation::application::ports::incoming::use_cases::{
    RevalidateError, RevalidatePagesUseCase, RevalidationOutcome,
};
use crate::shared::audience::Audience;

// ============================================================================
// Auth
// ============================================================================

#[derive(Clone)]
pub struct StubLoginAdminUseCase;

#[async_trait]
impl LoginAdminUseCase for StubLoginAdminUseCase {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginAdminResponse, LoginAdminError> {
        Err(LoginAdminError::InvalidCredentials)
    }
}

// ============================================================================
// Revalidation
// ============================================================================

#[derive(Clone, Default)]
pub struct StubRevalidatePages {
    failure: Option<String>,
}

impl StubRevalidatePages {
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
        }
    }
}

#[async_trait]
impl RevalidatePagesUseCase for StubRevalidatePages {
    async fn execute(&self, path: &str) -> Result<RevalidationOutcome, RevalidateError> {
        match &self.failure {
            Some(msg) => Err(RevalidateError::CacheFailure(msg.clone())),
            None => Ok(RevalidationOutcome {
                paths: reported_paths(path),
            }),
        }
    }
}

/// Records every path it is asked to revalidate, in call order.
#[derive(Default)]
pub struct RecordingRevalidator {
    paths: Mutex<Vec<String>>,
    failure: Option<String>,
}

impl RecordingRevalidator {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            paths: Mutex::new(Vec::new()),
            failure: Some(message.to_string()),
        })
    }

    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

#[async_trait]
impl RevalidatePagesUseCase for RecordingRevalidator {
    async fn execute(&self, path: &str) -> Result<RevalidationOutcome, RevalidateError> {
        if let Some(msg) = &self.failure {
            return Err(RevalidateError::CacheFailure(msg.clone()));
        }

        self.paths.lock().unwrap().push(path.to_string());
        Ok(RevalidationOutcome {
            paths: reported_paths(path),
        })
    }
}

// ============================================================================
// Profile
// ============================================================================

#[derive(Clone)]
pub struct StubGetProfileUseCase;

#[async_trait]
impl GetProfileUseCase for StubGetProfileUseCase {
    async fn execute(&self, _audience: Audience) -> Result<Profile, GetProfileError> {
        Err(GetProfileError::NotFound)
    }
}

#[derive(Clone)]
pub struct StubSaveProfileUseCase;

#[async_trait]
impl SaveProfileUseCase for StubSaveProfileUseCase {
    async fn execute(&self, _profile: Profile) -> Result<(), SaveProfileError> {
        Ok(())
    }
}

// ============================================================================
// About
// ============================================================================

#[derive(Clone, Default)]
pub struct StubGetAbout {
    failure: Option<String>,
}

impl StubGetAbout {
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
        }
    }
}

#[async_trait]
impl GetAboutUseCase for StubGetAbout {
    async fn execute(&self) -> Result<About, GetAboutError> {
        match &self.failure {
            Some(msg) => Err(GetAboutError::RepositoryError(msg.clone())),
            None => Err(GetAboutError::NotFound),
        }
    }
}

#[derive(Clone)]
pub struct StubSaveAboutUseCase;

#[async_trait]
impl SaveAboutUseCase for StubSaveAboutUseCase {
    async fn execute(&self, _about: About) -> Result<(), SaveAboutError> {
        Ok(())
    }
}

// ============================================================================
// Experience
// ============================================================================

#[derive(Clone)]
pub struct StubGetExperienceUseCase;

#[async_trait]
impl GetExperienceUseCase for StubGetExperienceUseCase {
    async fn execute(&self) -> Result<ExperienceSection, GetExperienceError> {
        Err(GetExperienceError::NotFound)
    }
}

#[derive(Clone)]
pub struct StubSaveExperienceUseCase;

#[async_trait]
impl SaveExperienceUseCase for StubSaveExperienceUseCase {
    async fn execute(&self, _section: ExperienceSection) -> Result<(), SaveExperienceError> {
        Ok(())
    }
}

// ============================================================================
// Projects
// ============================================================================

#[derive(Clone)]
pub struct StubGetProjectsUseCase;

#[async_trait]
impl GetProjectsUseCase for StubGetProjectsUseCase {
    async fn execute(&self, _audience: Audience) -> Result<Vec<Project>, GetProjectsError> {
        Ok(vec![])
    }
}

#[derive(Clone)]
pub struct StubGetSingleProjectUseCase;

#[async_trait]
impl GetSingleProjectUseCase for StubGetSingleProjectUseCase {
    async fn execute(&self, _id: &str) -> Result<Project, GetSingleProjectError> {
        Err(GetSingleProjectError::NotFound)
    }
}

#[derive(Clone)]
pub struct StubSaveProjectsUseCase;

#[async_trait]
impl SaveProjectsUseCase for StubSaveProjectsUseCase {
    async fn execute(&self, _projects: Vec<Project>) -> Result<(), SaveProjectsError> {
        Ok(())
    }
}

// ============================================================================
// Contact
// ============================================================================

#[derive(Clone)]
pub struct StubGetContactUseCase;

#[async_trait]
impl GetContactUseCase for StubGetContactUseCase {
    async fn execute(&self) -> Result<Contact, GetContactError> {
        Err(GetContactError::NotFound)
    }
}

#[derive(Clone)]
pub struct StubSaveContactUseCase;

#[async_trait]
impl SaveContactUseCase for StubSaveContactUseCase {
    async fn execute(&self, _contact: Contact) -> Result<(), SaveContactError> {
        Ok(())
    }
}

// ============================================================================
// Media
// ============================================================================

#[derive(Clone)]
pub struct StubUploadFileUseCase;

#[async_trait]
impl UploadFileUseCase for StubUploadFileUseCase {
    async fn execute(&self, _command: UploadFileCommand) -> Result<UploadedFile, UploadFileError> {
        Err(UploadFileError::MissingFile)
    }
}

// ============================================================================
// Mail
// ============================================================================

#[derive(Clone)]
pub struct StubSendContactMessageUseCase;

#[async_trait]
impl SendContactMessageUseCase for StubSendContactMessageUseCase {
    async fn execute(
        &self,
        _message: ContactMessage,
    ) -> Result<DeliveryReceipt, SendContactMessageError> {
        Err(SendContactMessageError::NotConfigured("mail provider"))
    }
}

/// Keeps every email it is handed; receipts are numbered `email-1`, `email-2`, ...
#[derive(Default)]
pub struct RecordingEmailSender {
    sent: Mutex<Vec<OutgoingEmail>>,
    failure: Option<EmailSenderError>,
}

impl RecordingEmailSender {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing(error: EmailSenderError) -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
            failure: Some(error),
        })
    }

    pub fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for RecordingEmailSender {
    async fn send(&self, email: OutgoingEmail) -> Result<DeliveryReceipt, EmailSenderError> {
        if let Some(err) = &self.failure {
            return Err(err.clone());
        }

        let mut sent = self.sent.lock().unwrap();
        sent.push(email);
        Ok(DeliveryReceipt {
            id: format!("email-{}", sent.len()),
        })
    }
}
