// Stable error codes reported alongside error messages

pub mod input {
    pub const MALFORMED_SELECTION: &str = "INPUT_1001";
}

pub mod admission {
    pub const ADMISSION_FAILED: &str = "ADMISSION_2001";
}

pub mod system {
    pub const CONFIGURATION: &str = "SYSTEM_9001";
    pub const IO: &str = "SYSTEM_9002";
}
