//! Dialog counting and paging.
//!
//! Telegram pages the dialog list backwards by date: the next page starts at
//! the date of the oldest message the previous page carried, which
//! [`compute_offset`] finds.

use std::collections::VecDeque;

use layer_peer_types as tl;

use crate::transport::Transport;
use crate::{Client, InvocationError};

/// The date to continue paging from, given one page's messages.
///
/// Scans from the end, skipping `messageEmpty` (which has no date), and
/// returns the first date found; `0` (start over from the newest) if there is
/// none.
pub fn compute_offset(messages: &[tl::enums::Message]) -> i32 {
    messages.iter().rev().find_map(tl::enums::Message::date).unwrap_or(0)
}

// ─── DialogsPage ──────────────────────────────────────────────────────────────

/// One page of `messages.getDialogs`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DialogsPage {
    pub dialogs:  Vec<tl::enums::Dialog>,
    /// The top message of each dialog.
    pub messages: Vec<tl::enums::Message>,
    pub chats:    Vec<tl::enums::Chat>,
    pub users:    Vec<tl::enums::User>,
    /// Total number of dialogs, when Telegram reports it (sliced results).
    pub count:    Option<i32>,
}

impl DialogsPage {
    /// The cursor for the page after this one.
    pub fn next_offset_date(&self) -> i32 {
        compute_offset(&self.messages)
    }
}

impl From<tl::enums::messages::Dialogs> for DialogsPage {
    fn from(d: tl::enums::messages::Dialogs) -> Self {
        match d {
            tl::enums::messages::Dialogs::Dialogs(d) => Self {
                dialogs: d.dialogs, messages: d.messages, chats: d.chats, users: d.users, count: None,
            },
            tl::enums::messages::Dialogs::Slice(d) => Self {
                dialogs: d.dialogs, messages: d.messages, chats: d.chats, users: d.users,
                count: Some(d.count),
            },
            tl::enums::messages::Dialogs::NotModified(d) => Self {
                count: Some(d.count),
                ..Self::default()
            },
        }
    }
}

// ─── Client methods ───────────────────────────────────────────────────────────

impl<T: Transport> Client<T> {
    /// Count the account's dialogs, or only the pinned ones.
    pub async fn get_dialogs_count(&self, pinned_only: bool) -> Result<usize, InvocationError> {
        if pinned_only {
            let pinned = self.invoke(&tl::functions::messages::GetPinnedDialogs { folder_id: 0 }).await?;
            return Ok(pinned.dialogs.len());
        }

        let req = tl::functions::messages::GetDialogs {
            exclude_pinned: false,
            folder_id:      None,
            offset_date:    0,
            offset_id:      0,
            offset_peer:    tl::enums::InputPeer::Empty,
            limit:          1,
            hash:           0,
        };
        Ok(match self.invoke(&req).await? {
            tl::enums::messages::Dialogs::Dialogs(d)     => d.dialogs.len(),
            tl::enums::messages::Dialogs::Slice(d)       => d.count.max(0) as usize,
            tl::enums::messages::Dialogs::NotModified(d) => d.count.max(0) as usize,
        })
    }

    /// Fetch one page of dialogs older than `offset_date` (`0` for the newest).
    pub async fn get_dialogs(&self, offset_date: i32, limit: i32) -> Result<DialogsPage, InvocationError> {
        let req = tl::functions::messages::GetDialogs {
            exclude_pinned: false,
            folder_id:      None,
            offset_date,
            offset_id:      0,
            offset_peer:    tl::enums::InputPeer::Empty,
            limit,
            hash:           0,
        };
        self.get_dialogs_page(req).await
    }

    async fn get_dialogs_page(
        &self,
        req: tl::functions::messages::GetDialogs,
    ) -> Result<DialogsPage, InvocationError> {
        let page = DialogsPage::from(self.invoke(&req).await?);
        self.cache_entities(&page.users, &page.chats).await;
        Ok(page)
    }

    /// Fetch dialogs page by page.
    ///
    /// # Example
    /// ```rust,no_run
    /// # async fn f<T: layer_peers::Transport>(client: layer_peers::Client<T>) -> Result<(), layer_peers::InvocationError> {
    /// let mut iter = client.iter_dialogs();
    /// while let Some(dialog) = iter.next(&client).await? {
    ///     println!("{:?}", dialog.peer());
    /// }
    /// # Ok(()) }
    /// ```
    pub fn iter_dialogs(&self) -> DialogIter {
        DialogIter {
            offset_date: 0,
            offset_id:   0,
            offset_peer: tl::enums::InputPeer::Empty,
            done:        false,
            buffer:      VecDeque::new(),
        }
    }
}

// ─── DialogIter ───────────────────────────────────────────────────────────────

/// Cursor-based iterator over dialogs. Created by [`Client::iter_dialogs`].
pub struct DialogIter {
    offset_date: i32,
    offset_id:   i32,
    offset_peer: tl::enums::InputPeer,
    done:        bool,
    buffer:      VecDeque<tl::enums::Dialog>,
}

impl DialogIter {
    const PAGE_SIZE: i32 = 100;

    /// Fetch the next dialog. Returns `None` when all dialogs have been yielded.
    pub async fn next<T: Transport>(
        &mut self,
        client: &Client<T>,
    ) -> Result<Option<tl::enums::Dialog>, InvocationError> {
        if let Some(d) = self.buffer.pop_front() { return Ok(Some(d)); }
        if self.done { return Ok(None); }

        let req = tl::functions::messages::GetDialogs {
            exclude_pinned: false,
            folder_id:      None,
            offset_date:    self.offset_date,
            offset_id:      self.offset_id,
            offset_peer:    self.offset_peer.clone(),
            limit:          Self::PAGE_SIZE,
            hash:           0,
        };
        let page = client.get_dialogs_page(req).await?;
        if page.dialogs.len() < Self::PAGE_SIZE as usize {
            self.done = true;
        }

        // Prepare cursor for next page
        self.offset_date = page.next_offset_date();
        if self.offset_date == 0 {
            self.done = true;
        }
        if let Some(last) = page.dialogs.last() {
            self.offset_id = last.top_message();
            self.offset_peer = client.inner.peer_cache.lock().await
                .lookup_peer(last.peer())
                .map(|p| p.to_input_peer())
                .unwrap_or(tl::enums::InputPeer::Empty);
        }

        self.buffer.extend(page.dialogs);
        Ok(self.buffer.pop_front())
    }
}
