mod generate;
mod roadmap;
mod schedule;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use generate::GenerateModal;
pub use roadmap::RoadmapView;
pub use schedule::ScheduleView;
pub use state::{
    ModalState, Notice, NoticeKind, NoticeSlot, SidebarState, SubmitState, ViewError,
};
