//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy
//! tasks. Uses embassy-sync primitives for safe async communication.
//!
//! Hardware discipline: every peripheral is owned by exactly one task,
//! and everything else talks to that task through these channels. The
//! button task in particular only enqueues events here - the actual
//! GPIO/bus writes happen in the controller and matrix tasks.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::mutex::Mutex;
use embassy_sync::signal::Signal;

use pentalux_core::state::{ButtonEvent, MatrixRequest};

use crate::display::StatusModel;

/// Channel capacity for host input characters
const INPUT_CHANNEL_SIZE: usize = 8;

/// Channel capacity for debounced button events
const BUTTON_CHANNEL_SIZE: usize = 8;

/// Channel capacity for pending matrix work
const MATRIX_CHANNEL_SIZE: usize = 4;

/// Characters received from the host console
pub static HOST_INPUT: Channel<CriticalSectionRawMutex, char, INPUT_CHANNEL_SIZE> = Channel::new();

/// Debounced button presses
pub static BUTTON_EVENTS: Channel<CriticalSectionRawMutex, ButtonEvent, BUTTON_CHANNEL_SIZE> =
    Channel::new();

/// Matrix work queued by the coordinator; the matrix task is the sole
/// consumer and the only code touching the LED chain
pub static MATRIX_REQUESTS: Channel<CriticalSectionRawMutex, MatrixRequest, MATRIX_CHANNEL_SIZE> =
    Channel::new();

/// Shared status screen state protected by mutex
pub static STATUS_MODEL: Mutex<CriticalSectionRawMutex, StatusModel> =
    Mutex::new(StatusModel::new());

/// Signal that the status screen should be redrawn
pub static SCREEN_UPDATE: Signal<CriticalSectionRawMutex, ()> = Signal::new();
