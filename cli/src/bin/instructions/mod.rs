pub mod process_claim;
pub mod process_clawback;
pub mod process_explain_error;
pub mod process_new_distributor;
pub mod process_set_admin;
pub mod process_set_clawback_receiver;
pub mod process_show;

pub use process_claim::*;
pub use process_clawback::*;
pub use process_explain_error::*;
pub use process_new_distributor::*;
pub use process_set_admin::*;
pub use process_set_clawback_receiver::*;
pub use process_show::*;
