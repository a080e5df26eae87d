use crate::about::application::about_use_cases::AboutUseCases;
use crate::about::application::ports::incoming::use_cases::{GetAboutUseCase, SaveAboutUseCase};
use crate::auth::adapter::incoming::web::SessionCookieConfig;
use crate::auth::application::auth_use_cases::AuthUseCases;
use crate::auth::application::use_cases::login_admin::LoginAdminUseCase;
use crate::contact::application::contact_use_cases::ContactUseCases;
use crate::contact::application::ports::incoming::use_cases::{
    GetContactUseCase, SaveContactUseCase,
};
use crate::experience::application::experience_use_cases::ExperienceUseCases;
use crate::experience::application::ports::incoming::use_cases::{
    GetExperienceUseCase, SaveExperienceUseCase,
};
use crate::mail::application::mail_use_cases::MailUseCases;
use crate::mail::application::ports::incoming::use_cases::SendContactMessageUseCase;
use crate::media::application::domain::UploadPolicy;
use crate::media::application::media_use_cases::MediaUseCases;
use crate::media::application::ports::incoming::use_cases::UploadFileUseCase;
use crate::profile::application::ports::incoming::use_cases::{
    GetProfileUseCase, SaveProfileUseCase,
};
use crate::profile::application::profile_use_cases::ProfileUseCases;
use crate::project::application::ports::incoming::use_cases::{
    GetProjectsUseCase, GetSingleProjectUseCase, SaveProjectsUseCase,
};
use crate::project::application::project_use_cases::ProjectUseCases;
use crate::revalidation::application::ports::incoming::use_cases::RevalidatePagesUseCase;
use crate::revalidation::application::revalidation_use_cases::RevalidationUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

/// Every use case starts as a stub; override only what the test exercises.
pub struct TestAppStateBuilder {
    auth: AuthUseCases,
    session_cookie: SessionCookieConfig,
    profile: ProfileUseCases,
    about: AboutUseCases,
    experience: ExperienceUseCases,
    project: ProjectUseCases,
    contact: ContactUseCases,
    revalidation: RevalidationUseCases,
    media: MediaUseCases,
    mail: MailUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            auth: AuthUseCases {
                login: Arc::new(StubLoginAdminUseCase),
            },
            session_cookie: SessionCookieConfig::default(),
            profile: ProfileUseCases {
                get: Arc::new(StubGetProfileUseCase),
                save: Arc::new(StubSaveProfileUseCase),
            },
            about: AboutUseCases {
                get: Arc::new(StubGetAbout::default()),
                save: Arc::new(StubSaveAboutUseCase),
            },
            experience: ExperienceUseCases {
                get: Arc::new(StubGetExperienceUseCase),
                save: Arc::new(StubSaveExperienceUseCase),
            },
            project: ProjectUseCases {
                get_list: Arc::new(StubGetProjectsUseCase),
                get_single: Arc::new(StubGetSingleProjectUseCase),
                save: Arc::new(StubSaveProjectsUseCase),
            },
            contact: ContactUseCases {
                get: Arc::new(StubGetContactUseCase),
                save: Arc::new(StubSaveContactUseCase),
            },
            revalidation: RevalidationUseCases {
                revalidate: Arc::new(StubRevalidatePages::default()),
            },
            media: MediaUseCases {
                upload: Arc::new(StubUploadFileUseCase),
                policy: UploadPolicy::default(),
            },
            mail: MailUseCases {
                send_contact_message: Arc::new(StubSendContactMessageUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_login(mut self, uc: impl LoginAdminUseCase + Send + Sync + 'static) -> Self {
        self.auth.login = Arc::new(uc);
        self
    }

    pub fn with_session_cookie(mut self, config: SessionCookieConfig) -> Self {
        self.session_cookie = config;
        self
    }

    pub fn with_revalidate(
        mut self,
        uc: impl RevalidatePagesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.revalidation.revalidate = Arc::new(uc);
        self
    }

    pub fn with_get_profile(mut self, uc: impl GetProfileUseCase + Send + Sync + 'static) -> Self {
        self.profile.get = Arc::new(uc);
        self
    }

    pub fn with_save_profile(
        mut self,
        uc: impl SaveProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.profile.save = Arc::new(uc);
        self
    }

    pub fn with_get_about(mut self, uc: impl GetAboutUseCase + Send + Sync + 'static) -> Self {
        self.about.get = Arc::new(uc);
        self
    }

    pub fn with_save_about(mut self, uc: impl SaveAboutUseCase + Send + Sync + 'static) -> Self {
        self.about.save = Arc::new(uc);
        self
    }

    pub fn with_get_experience(
        mut self,
        uc: impl GetExperienceUseCase + Send + Sync + 'static,
    ) -> Self {
        self.experience.get = Arc::new(uc);
        self
    }

    pub fn with_save_experience(
        mut self,
        uc: impl SaveExperienceUseCase + Send + Sync + 'static,
    ) -> Self {
        self.experience.save = Arc::new(uc);
        self
    }

    pub fn with_get_projects(
        mut self,
        uc: impl GetProjectsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_project(
        mut self,
        uc: impl GetSingleProjectUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.get_single = Arc::new(uc);
        self
    }

    pub fn with_save_projects(
        mut self,
        uc: impl SaveProjectsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.project.save = Arc::new(uc);
        self
    }

    pub fn with_get_contact(mut self, uc: impl GetContactUseCase + Send + Sync + 'static) -> Self {
        self.contact.get = Arc::new(uc);
        self
    }

    pub fn with_save_contact(
        mut self,
        uc: impl SaveContactUseCase + Send + Sync + 'static,
    ) -> Self {
        self.contact.save = Arc::new(uc);
        self
    }

    /// The policy is what the multipart handler enforces while streaming.
    pub fn with_upload(
        mut self,
        uc: impl UploadFileUseCase + Send + Sync + 'static,
        policy: UploadPolicy,
    ) -> Self {
        self.media = MediaUseCases {
            upload: Arc::new(uc),
            policy,
        };
        self
    }

    pub fn with_send_contact_message(
        mut self,
        uc: impl SendContactMessageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.mail.send_contact_message = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            auth: self.auth,
            session_cookie: self.session_cookie,
            profile: self.profile,
            about: self.about,
            experience: self.experience,
            project: self.project,
            contact: self.contact,
            revalidation: self.revalidation,
            media: self.media,
            mail: self.mail,
        })
    }
}
