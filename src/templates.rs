// Page templates (askama)

use askama::Template;

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    /// Username of the authenticated account
    pub username: String,
    /// Optional name echoed from the profile redirect query
    pub display_name: Option<String>,
    /// Registration state of the account (1, 2 or 3)
    pub rating: u8,
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub csrf_token: String,
}

#[derive(Template)]
#[template(path = "profile.html")]
pub struct ProfileTemplate {
    pub csrf_token: String,
    /// Submitted value, echoed back on validation failure
    pub username: String,
    pub errors: Vec<String>,
}
