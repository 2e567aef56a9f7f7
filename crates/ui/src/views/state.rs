#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message() -> &'static str {
        "Something went wrong. Please try again."
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    Open,
    #[default]
    Closed,
}

/// Whether a generation request is in flight. Only one may be.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
}

impl SubmitState {
    #[must_use]
    pub fn is_submitting(self) -> bool {
        self == SubmitState::Submitting
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SidebarState {
    #[default]
    Expanded,
    Collapsed,
}

impl SidebarState {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            SidebarState::Expanded => SidebarState::Collapsed,
            SidebarState::Collapsed => SidebarState::Expanded,
        }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            SidebarState::Expanded => "sidebar",
            SidebarState::Collapsed => "sidebar sidebar--collapsed",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A transient message shown above the page content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    #[must_use]
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn class(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "notice notice--success",
            NoticeKind::Error => "notice notice--error",
        }
    }
}

/// The visible notice plus a counter of how many were shown, so a timer
/// started for one notice never clears a later one with the same text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeSlot {
    shown: u64,
    current: Option<Notice>,
}

impl NoticeSlot {
    /// Shows `notice` and returns its ticket for [`NoticeSlot::dismiss`].
    pub fn show(&mut self, notice: Notice) -> u64 {
        self.shown += 1;
        self.current = Some(notice);
        self.shown
    }

    /// Clears the notice if it is still the one `ticket` was issued for.
    pub fn dismiss(&mut self, ticket: u64) -> bool {
        if ticket != self.shown || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    #[must_use]
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}
