use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Static landing payload served at `/`.
#[derive(Serialize, Debug)]
pub struct Welcome {
    pub message: &'static str,
}

impl Welcome {
    pub fn salon() -> Self {
        Self { message: "Услуги парикмахерской" }
    }
}

/// Acknowledgement body for destructive operations.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Ack {
    pub ok: bool,
}
