// src/models/claim.rs

use serde::{Deserialize, Serialize};

use crate::error::AmrError;
use crate::models::amr::{AuthenticationMethod, LookupMode};

/// Значение claim `amr`: упорядоченный список методов без повторов.
///
/// Сериализуется как массив кодов: `["pwd", "otp"]`. При чтении принимаются только канонические коды.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AmrClaim {
    methods: Vec<AuthenticationMethod>,
}

impl AmrClaim {
    pub fn new() -> Self {
        Self::default()
    }

    /// Собрать claim из кодов. Пустые элементы пропускаются, неизвестные — ошибка.
    pub fn from_codes<'a, I>(codes: I, mode: LookupMode) -> Result<Self, AmrError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut claim = Self::new();
        for code in codes {
            if let Some(method) = AuthenticationMethod::from_code_with(Some(code), mode)? {
                claim.push(method);
            }
        }
        Ok(claim)
    }

    /// Добавить метод. Возвращает `false`, если он уже есть.
    pub fn push(&mut self, method: AuthenticationMethod) -> bool {
        if self.contains(method) {
            return false;
        }
        self.methods.push(method);
        true
    }

    pub fn contains(&self, method: AuthenticationMethod) -> bool {
        self.methods.contains(&method)
    }

    pub fn iter(&self) -> impl Iterator<Item = AuthenticationMethod> + '_ {
        self.methods.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

impl FromIterator<AuthenticationMethod> for AmrClaim {
    fn from_iter<T: IntoIterator<Item = AuthenticationMethod>>(iter: T) -> Self {
        let mut claim = Self::new();
        for method in iter {
            claim.push(method);
        }
        claim
    }
}

impl Serialize for AmrClaim {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.methods.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AmrClaim {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let methods = Vec::<AuthenticationMethod>::deserialize(deserializer)?;
        Ok(methods.into_iter().collect())
    }
}
