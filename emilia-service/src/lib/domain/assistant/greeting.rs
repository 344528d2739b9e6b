/// Language used when the caller does not ask for one.
pub const DEFAULT_LANGUAGE: &str = "de";

/// Languages Emilia can greet in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    German,
    English,
    Spanish,
}

impl Language {
    /// Look up a language by its two-letter code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "de" => Some(Language::German),
            "en" => Some(Language::English),
            "es" => Some(Language::Spanish),
            _ => None,
        }
    }

    pub fn greeting(&self, name: &str) -> String {
        match self {
            Language::German => format!("Hallo {name}, ich bin Emilia."),
            Language::English => format!("Hello {name}, I am Emilia."),
            Language::Spanish => format!("Hola {name}, soy Emilia."),
        }
    }
}

/// Greet `name` in the language named by `code`.
///
/// Unknown codes get a German apology that quotes the code back.
pub fn greet(name: &str, code: &str) -> String {
    match Language::from_code(code) {
        Some(language) => language.greeting(name),
        None => format!("Hallo {name}, leider spreche ich nicht '{code}'!"),
    }
}
