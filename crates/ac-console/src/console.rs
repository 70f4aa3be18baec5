//! Role console orchestration
//!
//! Translates operator actions into client calls and outcomes into
//! notices and table reload signals. Holds no business data beyond the
//! current selection and the row a surface is showing; each handler
//! awaits its one call before touching state.

use std::sync::Arc;

use ac_client::{Result, RoleApi, RoleDraft, RoleItem, RoleList, RoleQuery};
use tracing::warn;

use crate::messages::{MessageCatalog, MessageId};
use crate::state::ConsoleState;
use crate::ui::{ConfirmGate, Notice, Notifier, TableHandle};

/// The role management screen, minus its rendering
pub struct RoleConsole {
    api: Arc<dyn RoleApi>,
    notifier: Arc<dyn Notifier>,
    confirm: Arc<dyn ConfirmGate>,
    table: Arc<dyn TableHandle>,
    messages: Arc<dyn MessageCatalog>,
    state: ConsoleState,
    selection: Vec<RoleItem>,
}

impl RoleConsole {
    pub fn new(
        api: Arc<dyn RoleApi>,
        notifier: Arc<dyn Notifier>,
        confirm: Arc<dyn ConfirmGate>,
        table: Arc<dyn TableHandle>,
        messages: Arc<dyn MessageCatalog>,
    ) -> Self {
        Self {
            api,
            notifier,
            confirm,
            table,
            messages,
            state: ConsoleState::Idle,
            selection: Vec::new(),
        }
    }

    pub fn state(&self) -> &ConsoleState {
        &self.state
    }

    /// Rows currently checked in the table
    pub fn selection(&self) -> &[RoleItem] {
        &self.selection
    }

    /// Mirror of the table's row checkboxes
    pub fn set_selection(&mut self, rows: Vec<RoleItem>) {
        self.selection = rows;
    }

    pub fn open_create(&mut self) {
        self.state = ConsoleState::Creating;
    }

    pub fn open_edit(&mut self, row: RoleItem) {
        self.state = ConsoleState::Editing { current: row };
    }

    pub fn open_detail(&mut self, row: RoleItem) {
        self.state = ConsoleState::ViewingDetail { current: row };
    }

    /// Close whichever surface is open, discarding its row
    pub fn close(&mut self) {
        self.state = ConsoleState::Idle;
    }

    /// Table data source; forwards the query untouched
    pub async fn load(&self, query: &RoleQuery) -> Result<RoleList> {
        self.api.read_roles(query).await
    }

    /// Create-form submit.
    ///
    /// Rejects an empty name before any request is issued. On success the
    /// modal closes and the table reloads; on failure the modal stays open
    /// so the operator can retry.
    pub async fn submit_create(&mut self, draft: RoleDraft) -> bool {
        if draft.validate().is_err() {
            self.notifier
                .notify(Notice::Failure(self.text(MessageId::RoleNameRequired)));
            return false;
        }

        self.notifier
            .notify(Notice::Loading(self.text(MessageId::CreatePending)));

        match self.api.create_role(&draft).await {
            Ok(_) => {
                self.notifier.dismiss();
                self.notifier
                    .notify(Notice::Success(self.text(MessageId::CreateSucceeded)));
                self.state = ConsoleState::Idle;
                self.table.reload();
                true
            }
            Err(err) => {
                self.notifier.dismiss();
                warn!(error = %err, "create role failed");
                self.notifier
                    .notify(Notice::Failure(self.text(MessageId::CreateFailed)));
                false
            }
        }
    }

    /// Update-form submit; the full entity is resent
    pub async fn submit_update(&mut self, item: RoleItem) -> bool {
        if item.validate().is_err() {
            self.notifier
                .notify(Notice::Failure(self.text(MessageId::RoleNameRequired)));
            return false;
        }

        self.notifier
            .notify(Notice::Loading(self.text(MessageId::UpdatePending)));

        match self.api.update_role(&item).await {
            Ok(_) => {
                self.notifier.dismiss();
                self.notifier
                    .notify(Notice::Success(self.text(MessageId::UpdateSucceeded)));
                self.state = ConsoleState::Idle;
                self.table.reload();
                true
            }
            Err(err) => {
                self.notifier.dismiss();
                warn!(error = %err, "update role failed");
                self.notifier
                    .notify(Notice::Failure(self.text(MessageId::UpdateFailed)));
                false
            }
        }
    }

    /// Delete the checked rows after an explicit confirmation.
    ///
    /// Cancel means no call at all. The call is awaited and the notice
    /// reflects its real outcome; the selection survives a failure so the
    /// operator can retry.
    pub async fn delete_selected(&mut self) -> bool {
        if self.selection.is_empty() {
            return false;
        }

        let title = self.text(MessageId::DeleteConfirmTitle);
        let body = self.text(MessageId::DeleteConfirmBody);
        if !self.confirm.confirm(&title, &body).await {
            return false;
        }

        self.notifier
            .notify(Notice::Loading(self.text(MessageId::DeletePending)));

        match self.api.delete_roles(&self.selection).await {
            Ok(()) => {
                self.notifier.dismiss();
                self.notifier
                    .notify(Notice::Success(self.text(MessageId::DeleteSucceeded)));
                self.selection.clear();
                self.table.reload_and_reset();
                true
            }
            Err(err) => {
                self.notifier.dismiss();
                warn!(error = %err, "delete roles failed");
                self.notifier
                    .notify(Notice::Failure(self.text(MessageId::DeleteFailed)));
                false
            }
        }
    }

    fn text(&self, id: MessageId) -> String {
        self.messages.format(id)
    }
}
