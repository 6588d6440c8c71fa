//! src/crypto/secure_buffer.rs
//! Fixed-size secret buffer, wiped on every exit path

use core::fmt;

use secrecy::{ExposeSecret, ExposeSecretMut, SecretBox};
use zeroize::Zeroize;

/// Owned, fixed-length byte buffer that overwrites itself with zeros when dropped.
///
/// - Not `Clone`/`Copy`: exactly one owner at a time
/// - Contents are reachable only through [`expose_secret`](Self::expose_secret)
///   and [`expose_secret_mut`](Self::expose_secret_mut)
/// - `Debug` never prints the bytes
///
/// The wipe lives in `Drop`, so it also runs when a constructor bails out with `?`
/// halfway through filling the buffer.
pub struct SecureBuffer<const N: usize> {
    inner: SecretBox<[u8; N]>,
}

impl<const N: usize> SecureBuffer<N> {
    /// Take ownership of `bytes`.
    ///
    /// The caller's copy is moved in; wipe any other copies you made.
    #[inline(always)]
    pub fn new(bytes: [u8; N]) -> Self {
        Self {
            inner: SecretBox::new(Box::new(bytes)),
        }
    }

    /// All-zero buffer, ready to be used as a KDF output parameter.
    #[inline(always)]
    pub fn zeroed() -> Self {
        Self::new([0u8; N])
    }

    #[inline(always)]
    pub fn expose_secret(&self) -> &[u8; N] {
        self.inner.expose_secret()
    }

    #[inline(always)]
    pub fn expose_secret_mut(&mut self) -> &mut [u8; N] {
        self.inner.expose_secret_mut()
    }

    /// Buffer length in bytes (always `N`).
    #[inline(always)]
    pub const fn len(&self) -> usize {
        N
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// True when every byte is zero.
    pub fn is_wiped(&self) -> bool {
        self.expose_secret().iter().all(|&b| b == 0)
    }
}

impl<const N: usize> Zeroize for SecureBuffer<N> {
    fn zeroize(&mut self) {
        self.inner.expose_secret_mut().zeroize();
        #[cfg(test)]
        wipe_log::record(self.is_wiped());
    }
}

impl<const N: usize> Drop for SecureBuffer<N> {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl<const N: usize> fmt::Debug for SecureBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecureBuffer<{N}>([REDACTED])")
    }
}
