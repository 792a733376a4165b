/// Turn a kebab-case API name into a display name: `"thunder-stone"` becomes
/// `"Thunder Stone"`. Only the first letter of each word is touched.
pub fn display_name(api_name: &str) -> String {
    api_name
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

/// Label for a learn method: the first hyphen becomes a space before the
/// usual word capitalisation, so `"level-up"` reads `"Level up"`.
pub fn learn_method_label(method: &str) -> String {
    display_name(&method.replacen('-', " ", 1))
}
