// src/models/amr.rs

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::AmrError;

/// Устаревший код отпечатка пальца. Ранние клиенты отправляли `ftp` вместо `fpt`.
pub const LEGACY_FINGERPRINT_CODE: &str = "ftp";

// ========================================
// 🔐 AuthenticationMethod — закрытый каталог AMR
// ========================================

/// Способ аутентификации субъекта (Authentication Method Reference).
///
/// На проводе всегда передаётся только короткий код (`pwd`, `otp`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AuthenticationMethod {
    Face,
    Fingerprint,
    Geolocation,
    ProofOfPossession,
    Iris,
    Knowledge,
    MultiChannel,
    MultiFactor,
    OneTimePasscode,
    Pin,
    Password,
    Risk,
    Retina,
}

/// Режим обратного поиска по коду
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LookupMode {
    /// Канонические коды + устаревший `ftp`
    #[default]
    Lenient,
    /// Только канонические коды
    Strict,
}

// Индекс код → значение, строится один раз при первом обращении
static BY_CODE: Lazy<HashMap<&'static str, AuthenticationMethod>> = Lazy::new(|| {
    AuthenticationMethod::ALL
        .iter()
        .map(|method| (method.code(), *method))
        .collect()
});

impl AuthenticationMethod {
    /// Все значения в порядке каталога
    pub const ALL: [AuthenticationMethod; 13] = [
        Self::Face,
        Self::Fingerprint,
        Self::Geolocation,
        Self::ProofOfPossession,
        Self::Iris,
        Self::Knowledge,
        Self::MultiChannel,
        Self::MultiFactor,
        Self::OneTimePasscode,
        Self::Pin,
        Self::Password,
        Self::Risk,
        Self::Retina,
    ];

    /// Канонический код для передачи по сети
    pub fn code(self) -> &'static str {
        match self {
            Self::Face => "face",
            Self::Fingerprint => "fpt",
            Self::Geolocation => "geo",
            Self::ProofOfPossession => "hwk",
            Self::Iris => "iris",
            Self::Knowledge => "kba",
            Self::MultiChannel => "mca",
            Self::MultiFactor => "mfa",
            Self::OneTimePasscode => "otp",
            Self::Pin => "pin",
            Self::Password => "pwd",
            Self::Risk => "rba",
            Self::Retina => "retina",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Face => "Facial recognition",
            Self::Fingerprint => "Fingerprint biometric",
            Self::Geolocation => "Use of geolocation information",
            Self::ProofOfPossession => "Proof-of-possession (PoP) of a hardware-secured key",
            Self::Iris => "Iris scan biometric",
            Self::Knowledge => "Knowledge-based authentication",
            Self::MultiChannel => "Multiple-channel authentication",
            Self::MultiFactor => "Multiple-factor authentication",
            Self::OneTimePasscode => "One-time passcode",
            Self::Pin => "Personal Identification Number",
            Self::Password => "Password-based authentication",
            Self::Risk => "Risk-based authentication",
            Self::Retina => "Retina scan biometric",
        }
    }

    /// Справочный текст (ссылки на RFC / draft-ietf-oauth-amr-values). Может быть пустым.
    pub fn description(self) -> &'static str {
        match self {
            Self::ProofOfPossession => "See https://tools.ietf.org/html/rfc4211#appendix-C",
            Self::Knowledge => concat!(
                "See https://tools.ietf.org/html/draft-ietf-oauth-amr-values-04#ref-NIST.800-63-2\n",
                "See https://tools.ietf.org/html/draft-ietf-oauth-amr-values-04#ref-ISO29115",
            ),
            Self::MultiChannel => concat!(
                "The authentication involves\n",
                "communication over more than one distinct communication channel.\n",
                "For instance, a multiple-channel authentication might involve both\n",
                "entering information into a workstation's browser and providing\n",
                "information on a telephone call to a pre-registered number.",
            ),
            Self::MultiFactor => concat!(
                "Multiple-factor authentication [NIST.800-63-2],",
                "https://tools.ietf.org/html/draft-ietf-oauth-amr-values-04#ref-NIST.800-63-2\n",
                "[ISO29115], https://tools.ietf.org/html/draft-ietf-oauth-amr-values-04#ref-ISO29115.\n",
                "When this is present, specific authentication methods used may also be included.",
            ),
            Self::OneTimePasscode => concat!(
                "One-time password specifications that this\n",
                "authentication method applies to include\n",
                "[RFC4226], https://tools.ietf.org/html/rfc4226 and\n",
                "[RFC6238], https://tools.ietf.org/html/rfc6238",
            ),
            Self::Pin => concat!(
                "Personal Identification Number or pattern (not restricted to\n",
                "containing only numbers) that a user enters to unlock a key on the\n",
                "device.  This mechanism should have a way to deter an attacker\n",
                "from obtaining the PIN by trying repeated guesses.\n",
            ),
            Self::Risk => "https://tools.ietf.org/html/draft-ietf-oauth-amr-values-04#ref-JECM",
            Self::Face
            | Self::Fingerprint
            | Self::Geolocation
            | Self::Iris
            | Self::Password
            | Self::Retina => "",
        }
    }

    /// Найти значение по коду (нестрогий режим).
    ///
    /// `None` и пустая строка означают «метод не указан» и возвращают `Ok(None)`.
    /// Неизвестный код — `AmrError::InvalidArgument` с исходной строкой.
    pub fn from_code(code: Option<&str>) -> Result<Option<Self>, AmrError> {
        Self::from_code_with(code, LookupMode::Lenient)
    }

    pub fn from_code_with(code: Option<&str>, mode: LookupMode) -> Result<Option<Self>, AmrError> {
        let code = match code {
            Some(c) if !c.trim().is_empty() => c,
            _ => return Ok(None),
        };

        if let Some(method) = BY_CODE.get(code) {
            return Ok(Some(*method));
        }

        if code == LEGACY_FINGERPRINT_CODE && mode == LookupMode::Lenient {
            tracing::warn!(
                code,
                canonical = Self::Fingerprint.code(),
                "legacy AMR code accepted"
            );
            return Ok(Some(Self::Fingerprint));
        }

        Err(AmrError::InvalidArgument(code.to_string()))
    }
}

impl fmt::Display for AuthenticationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Разбор обязательного кода: пустая строка здесь — ошибка
impl FromStr for AuthenticationMethod {
    type Err = AmrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(Some(s))?.ok_or_else(|| AmrError::InvalidArgument(s.to_string()))
    }
}

// Ручная реализация Serialize — только код
impl Serialize for AuthenticationMethod {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

// Ручная реализация Deserialize — только канонические коды, без `ftp`
impl<'de> Deserialize<'de> for AuthenticationMethod {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        Self::from_code_with(Some(code.as_str()), LookupMode::Strict)
            .and_then(|method| method.ok_or_else(|| AmrError::InvalidArgument(code.clone())))
            .map_err(serde::de::Error::custom)
    }
}
