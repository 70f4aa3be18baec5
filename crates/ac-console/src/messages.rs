//! Operator-facing message catalog
//!
//! Localization lives outside this crate; the console only asks a catalog
//! to format a message id. Ids follow the screen structure (form titles,
//! field rules, outcome notices).

/// Message identifiers used by the role screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageId {
    CreateFormTitle,
    UpdateFormTitle,
    RoleNameLabel,
    RoleNameRequired,
    CreatePending,
    CreateSucceeded,
    CreateFailed,
    UpdatePending,
    UpdateSucceeded,
    UpdateFailed,
    DeletePending,
    DeleteSucceeded,
    DeleteFailed,
    DeleteConfirmTitle,
    DeleteConfirmBody,
}

/// Message-formatting collaborator
pub trait MessageCatalog: Send + Sync {
    fn format(&self, id: MessageId) -> String;
}

/// Built-in English catalog used when no localization layer is plugged in
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishCatalog;

impl MessageCatalog for EnglishCatalog {
    fn format(&self, id: MessageId) -> String {
        let text = match id {
            MessageId::CreateFormTitle => "New role",
            MessageId::UpdateFormTitle => "Edit role",
            MessageId::RoleNameLabel => "Role name",
            MessageId::RoleNameRequired => "Role name is required",
            MessageId::CreatePending => "Creating role",
            MessageId::CreateSucceeded => "Role created",
            MessageId::CreateFailed => "Creating the role failed, please retry",
            MessageId::UpdatePending => "Updating role",
            MessageId::UpdateSucceeded => "Role updated",
            MessageId::UpdateFailed => "Updating the role failed, please retry",
            MessageId::DeletePending => "Deleting roles",
            MessageId::DeleteSucceeded => "Roles deleted",
            MessageId::DeleteFailed => "Deleting the roles failed, please retry",
            MessageId::DeleteConfirmTitle => "Delete roles?",
            MessageId::DeleteConfirmBody => "The selected roles will be removed",
        };
        text.to_string()
    }
}
