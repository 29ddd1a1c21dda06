//! Default generator and entry point functions.

#![cfg(feature = "global_gen")]
#![cfg_attr(docsrs, doc(cfg(feature = "global_gen")))]

use std::cell::RefCell;

use rand::rngs::ThreadRng;

use crate::generator::{with_rand08::Adapter, V4Generator};
use crate::Uuid;

thread_local! {
    static DEFAULT_GENERATOR: RefCell<V4Generator<Adapter<ThreadRng>>> = Default::default();
}

/// Generates a UUIDv4 object.
///
/// This function employs a thread-local generator backed by [`ThreadRng`], a cryptographically
/// secure generator seeded from the operating system, so concurrent callers never contend for
/// shared state. On Unix, the generator is reseeded when the process ID changes (i.e., upon
/// process forks) to prevent collisions across processes.
///
/// # Examples
///
/// ```rust
/// let uuid = rfc4122::uuid4();
/// println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
///
/// let uuid_string: String = rfc4122::uuid4().to_string();
/// ```
pub fn uuid4() -> Uuid {
    DEFAULT_GENERATOR.with(|g| {
        if unix_fork_safety::reseed_thread_rng_upon_pid_change() {
            log::debug!("process id changed; recreating thread-local uuid generator");
            g.replace(Default::default());
        }

        g.borrow_mut().generate()
    })
}

impl Uuid {
    /// Creates a UUIDv4 object. See [`uuid4`].
    pub fn new_v4() -> Self {
        uuid4()
    }
}

#[cfg(unix)]
mod unix_fork_safety {
    use std::{cell::Cell, process};

    thread_local! {
        static PID: Cell<u32> = Cell::new(process::id());
    }

    /// Reseeds ThreadRng immediately when the process ID changes (i.e. upon process forks),
    /// returning true if ThreadRng is reseeded or false otherwise.
    pub fn reseed_thread_rng_upon_pid_change() -> bool {
        PID.with(|last_pid| {
            let pid = process::id();
            if pid == last_pid.replace(pid) {
                false
            } else {
                // As of rand v0.8.5 and rand_chacha v0.3.1, up to 63 `u32` values have to be used
                // before reseeding after a fork.
                let _: [[u32; 32]; 2] = rand::random();
                true
            }
        })
    }
}

#[cfg(not(unix))]
mod unix_fork_safety {
    pub const fn reseed_thread_rng_upon_pid_change() -> bool {
        false
    }
}
