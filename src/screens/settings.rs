use crate::config::APP_VERSION;
use crate::models::User;

pub fn render(dark_theme: bool, user: Option<&User>) -> String {
    let email = user.map(|u| u.email.as_str()).unwrap_or("");
    let theme = if dark_theme { "on" } else { "off" };
    [
        "Profile".to_string(),
        email.to_string(),
        String::new(),
        format!("Dark theme: {theme}"),
        String::new(),
        "About".to_string(),
        format!("Version {APP_VERSION}"),
        String::new(),
        "[logout]".to_string(),
    ]
    .join("\n")
}
