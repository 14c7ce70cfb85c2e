//! UI Components
//!
//! Reusable Leptos components.

mod dashboard;
mod member_add;
mod member_detail;
mod member_list;
mod not_found;
mod remove_member_button;

pub use dashboard::Dashboard;
pub use member_add::MemberAdd;
pub use member_detail::MemberDetail;
pub use member_list::MemberList;
pub use not_found::NotFound;
pub use remove_member_button::RemoveMemberButton;
