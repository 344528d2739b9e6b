use std::str::FromStr;

/// Welcome text served at the root.
pub const HELLO: &str = "👋 Hi, I am Emilia! Ask me to greet you, camelize your keys, \
handle an action or keep a secret. Every topic under /about explains itself.";

/// Areas Emilia can explain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Greet,
    Camelize,
    Action,
    Secret,
}

impl Topic {
    pub const ALL: [Topic; 4] = [Topic::Greet, Topic::Camelize, Topic::Action, Topic::Secret];

    pub fn name(&self) -> &'static str {
        match self {
            Topic::Greet => "greet",
            Topic::Camelize => "camelize",
            Topic::Action => "action",
            Topic::Secret => "secret",
        }
    }

    pub fn info(&self) -> &'static str {
        match self {
            Topic::Greet => {
                "👋 GET /greet/{name}?language={code} greets you in German (de), English (en) \
                 or Spanish (es). German is the default."
            }
            Topic::Camelize => {
                "🐍➡️🐪 POST /camelize takes a flat JSON object and returns it with every \
                 snake_case key turned into camelCase."
            }
            Topic::Action => {
                "🤌 POST /action takes {\"username\", \"action\"} and answers calls, reminders \
                 and timers for the people Emilia knows."
            }
            Topic::Secret => {
                "🔒 POST /token trades a username and password for a bearer token. \
                 GET /users/{username}/secret returns your own secret with that token."
            }
        }
    }

    pub fn help(&self) -> &'static str {
        match self {
            Topic::Greet => {
                "🙋 Unsupported language codes are answered in German, quoting the code back."
            }
            Topic::Camelize => {
                "🙋 Only keys change. The first word stays as written, every following word \
                 starts with an upper-case letter."
            }
            Topic::Action => {
                "🙋 The first of the keywords call, remind and timer found in the action \
                 decides what happens. Calls only reach friends in your contacts."
            }
            Topic::Secret => {
                "🙋 Send the token as `Authorization: Bearer <token>`. Tokens expire (30 minutes by \
                 default) and only open the secret of the user they were issued to."
            }
        }
    }
}

impl FromStr for Topic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Topic::ALL
            .into_iter()
            .find(|topic| topic.name() == s)
            .ok_or_else(|| format!("Unknown topic: {}", s))
    }
}
