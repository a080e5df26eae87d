use maud::html;
use serde::Deserialize;
use utoipa::ToSchema;

/// Visitor message from the public contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(default)]
pub struct ContactMessage {
    pub name: String,
    #[schema(example = "visitor@example.com")]
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// First blank field, in form order.
    pub fn first_missing_field(&self) -> Option<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }

    pub fn subject_line(&self) -> String {
        format!("Contact form: {}", self.subject.trim())
    }

    /// Mail body. Every interpolated value is escaped by `html!`.
    pub fn render_html(&self) -> String {
        html! {
            h2 { "New contact form message" }
            p { strong { "Name:" } " " (self.name.trim()) }
            p { strong { "Email:" } " " (self.email.trim()) }
            p { strong { "Subject:" } " " (self.subject.trim()) }
            p { strong { "Message:" } }
            p {
                @for (i, line) in self.message.trim().lines().enumerate() {
                    @if i > 0 { br; }
                    (line)
                }
            }
        }
        .into_string()
    }
}
