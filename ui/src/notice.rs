#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient toast message.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct Notices {
    next_id: u32,
    items: Vec<Notice>,
}

impl Notices {
    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.items.push(Notice {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    pub fn dismiss(&mut self, id: u32) {
        self.items.retain(|n| n.id != id);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notice> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismiss_removes_only_that_notice() {
        let mut notices = Notices::default();
        let first = notices.push(NoticeKind::Success, "one");
        let second = notices.push(NoticeKind::Error, "two");

        notices.dismiss(first);

        let left: Vec<_> = notices.iter().map(|n| n.id).collect();
        assert_eq!(left, vec![second]);
        assert_eq!(notices.iter().last().map(|n| n.kind), Some(NoticeKind::Error));
    }
}
