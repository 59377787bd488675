mod trial;

pub use trial::is_prime;

use derive_more::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Verdict {
    #[display("prime")]
    Prime,
    #[display("composite")]
    Composite,
}

impl Verdict {
    pub fn of(num: i64) -> Self {
        Verdict::from(is_prime(num))
    }
}

impl From<bool> for Verdict {
    fn from(prime: bool) -> Self {
        match prime {
            true => Verdict::Prime,
            false => Verdict::Composite,
        }
    }
}
