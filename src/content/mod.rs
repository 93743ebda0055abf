//! Copy shown on the Pouch home page.

use crate::models::{FeatureRecord, Icon, RichText};

/// Features in the order the home page presents them.
pub const POUCH_FEATURES: &[FeatureRecord] = &[
    FeatureRecord::new(
        "Tiny",
        Icon::Mountain,
        RichText::plain(
            "Pouch ships as a single binary for multiple operating system architectures.",
        ),
    ),
    FeatureRecord::new(
        "Multi-protocol",
        Icon::Tree,
        RichText::plain(
            "Pouch operates on (most) protocols of your choice - TCP, Websocket, QUIC, and even Unix sockets!",
        ),
    ),
    FeatureRecord::new(
        "Horizontally scalable",
        Icon::React,
        RichText::plain(
            "Pouch provides horizontal scalability, powered by Raft-based consistency.",
        ),
    ),
];

pub const PROJECT_NAME: &str = "Pouch";
pub const TAGLINE: &str = "A tiny, multi-protocol, horizontally scalable data store";
