//! Board pin assignments
//!
//! Fixed wiring of the BitDogLab-class learning board this firmware
//! targets. `main` must pass the matching typed peripherals; these
//! constants document the mapping in one place.

/// WS2812 matrix data line
pub const MATRIX_DATA_PIN: u8 = 7;

/// Discrete RGB indicator LED, red channel
pub const LED_RED_PIN: u8 = 13;

/// Discrete RGB indicator LED, green channel
pub const LED_GREEN_PIN: u8 = 11;

/// Discrete RGB indicator LED, blue channel
pub const LED_BLUE_PIN: u8 = 12;

/// Button A (active low, internal pull-up)
pub const BUTTON_A_PIN: u8 = 5;

/// Button B (active low, internal pull-up)
pub const BUTTON_B_PIN: u8 = 6;

/// Joystick press button (active low, internal pull-up)
pub const BUTTON_JOY_PIN: u8 = 22;

/// I2C1 SDA for the OLED status panel
pub const I2C_SDA_PIN: u8 = 14;

/// I2C1 SCL for the OLED status panel
pub const I2C_SCL_PIN: u8 = 15;

/// SSD1306 I2C address
pub const OLED_ADDRESS: u8 = 0x3C;

/// I2C bus frequency for the status panel
pub const I2C_FREQ_HZ: u32 = 400_000;
