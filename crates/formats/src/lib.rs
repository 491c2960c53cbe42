//! Interchange formats for seismic event processing.
//!
//! Each message that flows between the picker, associator, locator,
//! and travel-time services is modeled as a plain struct of optional
//! fields with two orthogonal capabilities:
//!
//! - [`Codec`]: decode from and encode to a JSON Value Tree (and, via
//!   the provided methods, JSON text). Decoding is lenient about
//!   missing keys and strict about present ones.
//! - [`Validate`]: check the entity against its contract and report
//!   every unmet requirement as a human-readable message.
//!
//! The split means a message can always be decoded, inspected, and
//! re-encoded even when it is incomplete; only the consumer that acts
//! on it needs it to be valid.
//!
//! ```
//! use seismic_formats::{Codec, Validate, Pick};
//!
//! let pick = Pick::from_json(
//!     r#"{"ID":"12GFH48776857",
//!         "Site":{"Station":"BOZ","Channel":"BHZ","Network":"US","Location":"00"},
//!         "Source":{"AgencyID":"US","Author":"TestAuthor","Type":"Unknown"},
//!         "Time":"2015-12-28T21:32:24.017Z","PickedPhase":"P"}"#,
//! )?;
//! assert!(pick.is_valid());
//! assert_eq!(pick.picked_phase.as_deref(), Some("P"));
//! # Ok::<(), seismic_formats::DecodeError>(())
//! ```

pub mod codec;
pub mod error;
pub mod error_ellipse;
pub mod hypocenter;
pub mod location_request;
pub mod location_result;
pub mod pick;
pub mod site;
pub mod source;
pub mod travel_time;
pub mod validate;
pub mod value;

pub use codec::Codec;
pub use error::DecodeError;
pub use error_ellipse::{ErrorEllipse, ErrorEllipseAxis};
pub use hypocenter::Hypocenter;
pub use location_request::LocationRequest;
pub use location_result::{LocationResult, LOCATOR_EXIT_CODES};
pub use pick::Pick;
pub use site::Site;
pub use source::{Source, SOURCE_TYPES};
pub use travel_time::{
    TravelTimeData, TravelTimePlotData, TravelTimePlotDataBranch, TravelTimePlotDataSample,
    TravelTimePlotRequest, TravelTimeReceiver, TravelTimeRequest, TravelTimeSession,
    TravelTimeSource,
};
pub use validate::Validate;
