pub mod applications_page;
