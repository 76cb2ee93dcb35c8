//! Program log output

/// Destination for the memo bytes
pub trait LogSink {
    fn log(&self, message: &[u8]);
}

/// Writes to the program log through the `sol_log_` syscall.
///
/// Off-chain the message goes to the `log` facade instead.
#[derive(Debug, Default, Clone, Copy)]
pub struct SyscallLog;

impl LogSink for SyscallLog {
    #[inline]
    fn log(&self, message: &[u8]) {
        #[cfg(target_os = "solana")]
        unsafe {
            solana_msg::syscalls::sol_log_(message.as_ptr(), message.len() as u64);
        }

        #[cfg(not(target_os = "solana"))]
        ::log::info!("Program log: {}", String::from_utf8_lossy(message));
    }
}
