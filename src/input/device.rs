//! Raw input records and the sources that deliver them.

use std::io;

/// `EV_KEY` record kind.
pub const EV_KEY: u16 = 0x01;

const TIMEVAL_SIZE: usize = std::mem::size_of::<libc::timeval>();

/// Size of the native `struct input_event`: a timeval, then type, code, value.
pub const RECORD_SIZE: usize = TIMEVAL_SIZE + 8;

/// One `struct input_event` without its timestamp.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawInputRecord {
    pub kind: u16,
    pub code: u16,
    pub value: i32,
}

impl RawInputRecord {
    pub const fn new(kind: u16, code: u16, value: i32) -> Self {
        Self { kind, code, value }
    }

    /// Decodes the native-endian record layout. Returns `None` if `bytes`
    /// is shorter than [`RECORD_SIZE`].
    pub fn decode(bytes: &[u8]) -> Option<Self> {
        let tail = bytes.get(TIMEVAL_SIZE..RECORD_SIZE)?;
        Some(Self {
            kind: u16::from_ne_bytes([tail[0], tail[1]]),
            code: u16::from_ne_bytes([tail[2], tail[3]]),
            value: i32::from_ne_bytes([tail[4], tail[5], tail[6], tail[7]]),
        })
    }
}

/// Non-blocking supplier of raw records.
pub trait EventSource {
    /// `Ok(None)` once nothing more is queued right now.
    fn read_record(&mut self) -> io::Result<Option<RawInputRecord>>;
}

#[cfg(target_os = "linux")]
pub use linux::EvdevDevice;

#[cfg(target_os = "linux")]
mod linux {
    use std::fs::{File, OpenOptions};
    use std::io::{self, Read};
    use std::os::unix::fs::OpenOptionsExt;
    use std::os::unix::io::AsRawFd;
    use std::path::{Path, PathBuf};
    use std::time::Duration;

    use super::{EventSource, RawInputRecord, RECORD_SIZE};

    /// `_IOW('E', 0x90, int)`
    const EVIOCGRAB: u64 = 0x4004_4590;

    /// An exclusively grabbed `/dev/input/event*` node opened non-blocking.
    /// The grab is released when the device is dropped.
    #[derive(Debug)]
    pub struct EvdevDevice {
        file: File,
        path: PathBuf,
    }

    impl EvdevDevice {
        /// Opens `path` and grabs it after `settle`. The delay lets keys that
        /// are still down from launching the program be released first.
        pub fn open(path: impl AsRef<Path>, settle: Duration) -> io::Result<Self> {
            let path = path.as_ref().to_path_buf();
            let file = OpenOptions::new()
                .read(true)
                .custom_flags(libc::O_NONBLOCK)
                .open(&path)?;

            if !settle.is_zero() {
                std::thread::sleep(settle);
            }
            set_grab(&file, true)?;

            tracing::info!(path = %path.display(), "input device grabbed");
            Ok(Self { file, path })
        }

        pub fn path(&self) -> &Path {
            &self.path
        }
    }

    fn set_grab(file: &File, grab: bool) -> io::Result<()> {
        let arg: libc::c_int = grab.into();
        // SAFETY: the fd is owned by `file` and stays open for the call;
        // EVIOCGRAB takes its argument by value.
        let ret = unsafe { libc::ioctl(file.as_raw_fd(), EVIOCGRAB as _, arg) };
        if ret == -1 {
            return Err(io::Error::last_os_error());
        }
        Ok(())
    }

    impl EventSource for EvdevDevice {
        fn read_record(&mut self) -> io::Result<Option<RawInputRecord>> {
            let mut buf = [0u8; RECORD_SIZE];
            loop {
                match self.file.read(&mut buf) {
                    Ok(0) => return Ok(None),
                    Ok(n) if n == RECORD_SIZE => return Ok(RawInputRecord::decode(&buf)),
                    Ok(n) => {
                        return Err(io::Error::new(
                            io::ErrorKind::InvalidData,
                            format!("short input record: {n} of {RECORD_SIZE} bytes"),
                        ))
                    }
                    Err(err) if err.kind() == io::ErrorKind::WouldBlock => return Ok(None),
                    Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                    Err(err) => return Err(err),
                }
            }
        }
    }

    impl Drop for EvdevDevice {
        fn drop(&mut self) {
            if let Err(err) = set_grab(&self.file, false) {
                tracing::warn!(path = %self.path.display(), error = %err, "ungrab input device failed");
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/input/device.rs"]
mod tests;
