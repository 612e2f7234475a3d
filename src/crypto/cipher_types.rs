use std::fmt;
use std::str::FromStr;

use crate::crypto::error::CipherError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherKind {
    Des,
    TripleDes,
    Deal,
    Serpent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherModeKind {
    Ecb,
    Cbc,
    Pcbc,
    Cfb,
    Ofb,
    Ctr,
    RandomDelta,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingKind {
    Zeros,
    AnsiX923,
    Pkcs7,
    Iso10126,
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CipherKind::Des => "des",
            CipherKind::TripleDes => "3des",
            CipherKind::Deal => "deal",
            CipherKind::Serpent => "serpent",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Display for CipherModeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CipherModeKind::Ecb => "ecb",
            CipherModeKind::Cbc => "cbc",
            CipherModeKind::Pcbc => "pcbc",
            CipherModeKind::Cfb => "cfb",
            CipherModeKind::Ofb => "ofb",
            CipherModeKind::Ctr => "ctr",
            CipherModeKind::RandomDelta => "random-delta",
        };
        write!(f, "{}", name)
    }
}

impl fmt::Display for PaddingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaddingKind::Zeros => "zeros",
            PaddingKind::AnsiX923 => "ansi-x923",
            PaddingKind::Pkcs7 => "pkcs7",
            PaddingKind::Iso10126 => "iso10126",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for CipherKind {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "des" => Ok(CipherKind::Des),
            "3des" | "tripledes" | "triple-des" => Ok(CipherKind::TripleDes),
            "deal" => Ok(CipherKind::Deal),
            "serpent" => Ok(CipherKind::Serpent),
            other => Err(CipherError::UnsupportedConfiguration(format!(
                "unknown cipher: {}",
                other
            ))),
        }
    }
}

impl FromStr for CipherModeKind {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ecb" => Ok(CipherModeKind::Ecb),
            "cbc" => Ok(CipherModeKind::Cbc),
            "pcbc" => Ok(CipherModeKind::Pcbc),
            "cfb" => Ok(CipherModeKind::Cfb),
            "ofb" => Ok(CipherModeKind::Ofb),
            "ctr" => Ok(CipherModeKind::Ctr),
            "random-delta" | "randomdelta" => Ok(CipherModeKind::RandomDelta),
            other => Err(CipherError::UnsupportedConfiguration(format!(
                "unknown cipher mode: {}",
                other
            ))),
        }
    }
}

impl FromStr for PaddingKind {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "zeros" => Ok(PaddingKind::Zeros),
            "ansi-x923" | "ansix923" | "x923" => Ok(PaddingKind::AnsiX923),
            "pkcs7" => Ok(PaddingKind::Pkcs7),
            "iso10126" => Ok(PaddingKind::Iso10126),
            other => Err(CipherError::UnsupportedConfiguration(format!(
                "unknown padding: {}",
                other
            ))),
        }
    }
}
