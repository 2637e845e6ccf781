use crate::error::Error;

/// Appends the trailing dot a fully-qualified record name carries.
/// Idempotent.
pub fn normalize(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{name}.")
    }
}

/// Derives the containing zone's name from a dot-terminated record name by
/// taking the last three dot-separated components, so `www.example.com.`
/// yields `example.com.`. This assumes zones are always two labels plus the
/// trailing empty label; public suffixes longer than two labels (e.g.
/// `example.co.uk.`) mis-resolve. Documented limitation.
pub fn zone_name_of(name: &str) -> Result<String, Error> {
    let components: Vec<&str> = name.split('.').collect();
    if components.len() < 3 {
        return Err(Error::InvalidName(name.to_string()));
    }
    Ok(components[components.len() - 3..].join("."))
}
