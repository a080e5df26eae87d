/// Who a read is for. Public reads get display normalisation; admin reads
/// return exactly what is stored so the dashboard edits the real values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
    Public,
    Admin,
}
