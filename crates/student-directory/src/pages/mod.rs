mod home;
mod students;

pub use home::Home;
pub use students::Students;
