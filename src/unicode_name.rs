/// Returns the lower-cased Unicode name of `chr`, e.g. "latin small letter
/// a". Characters the database gives no name (controls, private use,
/// unassigned code points) are named by their code point, "u+e000".
pub fn unicode_name(chr: char) -> String {
    match unicode_names2::name(chr) {
        Some(name) => name.to_string().to_lowercase(),
        None => format!("u+{:04x}", chr as u32),
    }
}
