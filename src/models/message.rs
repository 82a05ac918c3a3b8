#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Option<Role>,
    pub parts: Vec<String>,
}

impl Message {
    pub fn is_assistant(&self) -> bool {
        self.role == Some(Role::Assistant)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    System,
    User,
    Assistant,
    Tool,
    Other,
}

impl Role {
    pub fn from_export(value: &str) -> Self {
        match value {
            "system" => Role::System,
            "user" => Role::User,
            "assistant" => Role::Assistant,
            "tool" => Role::Tool,
            _ => Role::Other,
        }
    }
}
