//! Cookie header parsing.

/// Looks up a cookie by name across one or more `Cookie` header values.
///
/// Pairs without `=` are skipped. The first occurrence wins. Surrounding
/// double quotes on the value are removed.
///
/// # Examples
///
/// ```
/// use hr_admin_engine::gate::find_cookie;
///
/// let headers = ["theme=dark; admin_session_id=abc123"];
/// assert_eq!(find_cookie(headers, "admin_session_id"), Some("abc123".to_string()));
/// assert_eq!(find_cookie(headers, "employee_session_id"), None);
/// ```
pub fn find_cookie<'a, I>(header_values: I, name: &str) -> Option<String>
where
    I: IntoIterator<Item = &'a str>,
{
    header_values
        .into_iter()
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| {
            let value = value.trim();
            value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .unwrap_or(value)
                .to_string()
        })
}
