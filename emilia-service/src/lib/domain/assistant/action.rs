use std::collections::HashMap;

/// What the user wants done, as recognized from free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Call,
    Remind,
    Timer,
    Unknown,
}

/// Keywords in priority order. The first one found in the action wins.
const INTENT_KEYWORDS: [(&str, Intent); 3] = [
    ("call", Intent::Call),
    ("remind", Intent::Remind),
    ("timer", Intent::Timer),
];

impl Intent {
    /// Recognize the intent of an action (case-insensitive).
    pub fn detect(action: &str) -> Self {
        let action = action.to_lowercase();

        INTENT_KEYWORDS
            .iter()
            .find(|(keyword, _)| action.contains(keyword))
            .map(|(_, intent)| *intent)
            .unwrap_or(Intent::Unknown)
    }
}

/// Fixed directory of users and the friends they can call.
#[derive(Debug, Clone)]
pub struct Contacts {
    friends: HashMap<String, Vec<String>>,
}

impl Contacts {
    pub fn new(friends: HashMap<String, Vec<String>>) -> Self {
        Self { friends }
    }

    /// Friends of `username` in directory order, None for strangers.
    pub fn friends_of(&self, username: &str) -> Option<&[String]> {
        self.friends.get(username).map(Vec::as_slice)
    }
}

impl Default for Contacts {
    fn default() -> Self {
        let friends = [
            ("Matthias", ["Sahar", "Franziska", "Hans"]),
            ("Stefan", ["Felix", "Ben", "Philip"]),
        ]
        .into_iter()
        .map(|(user, friends)| {
            (
                user.to_string(),
                friends.iter().map(|f| f.to_string()).collect(),
            )
        })
        .collect();

        Self { friends }
    }
}

/// Routes a free-text action to the handler of its intent.
#[derive(Debug, Clone, Default)]
pub struct ActionDispatcher {
    contacts: Contacts,
}

impl ActionDispatcher {
    pub fn new(contacts: Contacts) -> Self {
        Self { contacts }
    }

    /// Handle `action` for `username` and return the reply message.
    pub fn dispatch(&self, username: &str, action: &str) -> String {
        let Some(friends) = self.contacts.friends_of(username) else {
            return format!(
                "Hi {username}, I don't know you yet. But I would love to meet you!"
            );
        };

        match Intent::detect(action) {
            Intent::Call => Self::call(username, action, friends),
            Intent::Remind => "🔔 Alright, I will remind you!".to_string(),
            Intent::Timer => "⏰ Alright, the timer is set!".to_string(),
            Intent::Unknown => "👀 Sorry , but I can't help with that!".to_string(),
        }
    }

    fn call(username: &str, action: &str, friends: &[String]) -> String {
        match friends.iter().find(|friend| action.contains(friend.as_str())) {
            Some(friend) => format!("🤙 Calling {friend} ..."),
            None => format!("{username}, I can't find this person in your contacts."),
        }
    }
}
