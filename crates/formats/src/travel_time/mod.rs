//! The travel-time family: source/receiver geometry, per-phase data,
//! plot data, and the request and session envelopes.

pub mod data;
pub mod plot;
pub mod receiver;
pub mod request;
pub mod session;
pub mod source;

pub use data::TravelTimeData;
pub use plot::{
    TravelTimePlotData, TravelTimePlotDataBranch, TravelTimePlotDataSample, TravelTimePlotRequest,
};
pub use receiver::TravelTimeReceiver;
pub use request::TravelTimeRequest;
pub use session::TravelTimeSession;
pub use source::TravelTimeSource;
