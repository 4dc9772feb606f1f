use log::debug;
use std::collections::VecDeque;

use crate::room::types::ChatMessage;

/// Historique borné des messages, dans l'ordre de réception.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatLog {
    messages: VecDeque<ChatMessage>,
    limit: usize,
}

impl ChatLog {
    pub fn new(limit: usize) -> Self {
        Self {
            messages: VecDeque::new(),
            limit: limit.max(1),
        }
    }

    /// Ajoute un message. Retourne `false` si son id est déjà présent.
    pub fn push(&mut self, message: ChatMessage) -> bool {
        if self.messages.iter().any(|m| m.id == message.id) {
            debug!("Duplicate chat message {} ignored", message.id);
            return false;
        }
        self.messages.push_back(message);
        while self.messages.len() > self.limit {
            self.messages.pop_front();
        }
        true
    }

    pub fn replace_all(&mut self, history: impl IntoIterator<Item = ChatMessage>) {
        self.messages.clear();
        for message in history {
            self.push(message);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.back()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}
