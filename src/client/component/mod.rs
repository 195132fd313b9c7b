pub mod header;
pub mod layout;
pub mod modal;
pub mod page;
pub mod pagination;
pub mod table;

pub use header::Header;
pub use layout::Layout;
pub use modal::Modal;
pub use page::{ErrorPage, LoadingPage, Page};
pub use pagination::{Pagination, PaginationData};
