pub mod new_distributor;
pub mod claim;
pub mod update_merkle_root;
pub mod withdraw;
pub mod transfer_ownership;

pub use new_distributor::*;
pub use claim::*;
pub use update_merkle_root::*;
pub use withdraw::*;
pub use transfer_ownership::*;
