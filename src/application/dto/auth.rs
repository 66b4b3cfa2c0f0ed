/// Administrator resolved from a bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminPrincipal {
    pub subject: String,
}
