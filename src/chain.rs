//! Collision chains: entries stored in a slot arena and linked by key.

use slotmap::{DefaultKey, SlotMap};
use std::collections::TryReserveError;

/// Arena holding every entry of a table. Buckets and `Entry::next` refer
/// into it by generational key.
pub(crate) type Arena = SlotMap<DefaultKey, Entry>;

/// Head of a chain; `None` for an empty bucket.
pub(crate) type Bucket = Option<DefaultKey>;

#[derive(Debug)]
pub(crate) struct Entry {
    pub(crate) key: Box<str>,
    pub(crate) value: String,
    pub(crate) next: Option<DefaultKey>,
}

/// Walks a chain from `head`, yielding each entry with its arena key.
pub(crate) struct Chain<'a> {
    arena: &'a Arena,
    cursor: Option<DefaultKey>,
}

impl<'a> Chain<'a> {
    pub(crate) fn new(arena: &'a Arena, head: Bucket) -> Self {
        Self {
            arena,
            cursor: head,
        }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = (DefaultKey, &'a Entry);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let id = self.cursor?;
        let entry = self.arena.get(id)?;
        self.cursor = entry.next;
        Some((id, entry))
    }
}

/// First entry in the chain at `head` whose key equals `key` byte for byte.
#[inline]
pub(crate) fn find(arena: &Arena, head: Bucket, key: &str) -> Option<DefaultKey> {
    Chain::new(arena, head)
        .find(|(_, e)| &*e.key == key)
        .map(|(id, _)| id)
}

/// Owned copy of `s` that reports allocator refusal instead of aborting.
pub(crate) fn try_copy(s: &str) -> Result<String, TryReserveError> {
    let mut out = String::new();
    out.try_reserve_exact(s.len())?;
    out.push_str(s);
    Ok(out)
}
