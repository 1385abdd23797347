use sha2::digest::DynDigest;

use crate::digest::Digest;

pub struct Validator {
    expect_digest: String,
    digest: Box<dyn DynDigest>,
}

impl Validator {
    pub(crate) fn new(digest: &Digest) -> Validator {
        Validator {
            expect_digest: digest.hex().to_string(),
            digest: digest.algorithm().new_boxed_digest(),
        }
    }

    /// Digest input data.
    ///
    /// This method can be called repeatedly for use with streaming messages.
    pub fn input(&mut self, data: &[u8]) {
        self.digest.update(data);
    }

    /// Consumes the validator, returning true if input data's digest matches
    /// the expected digest.
    pub fn validate(self) -> bool {
        hex::encode(self.digest.finalize()) == self.expect_digest
    }
}
