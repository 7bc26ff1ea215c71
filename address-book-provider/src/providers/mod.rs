//! User source implementations

mod randomuser;

pub use randomuser::RandomUserProvider;
