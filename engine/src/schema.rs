// Copyright (c) 2026 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the Apache-style license found in the
// LICENSE file in the root directory of this source tree.

//! Return shapes of native functions.
//!
//! A native function declares what it returns with a schema clause such as
//! `(Tensor values, Tensor indices)`. Only a fixed set of shapes can be handed
//! to the host runtime; [`ReturnKind::parse`] maps a clause onto one of them and
//! rejects everything else. [`NativeOutput`] carries a value of any supported
//! shape when the shape is only known at runtime.

use crate::{
    error::{MinitensorError, Result},
    quantization::QScheme,
    scalar::Scalar,
    tensor::{DataType, Tensor},
};
use std::fmt;

/// Every return shape the host marshaller accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReturnKind {
    None,
    Bool,
    Int,
    Float,
    Scalar,
    ScalarType,
    QScheme,
    Tensor,
    TensorList,
    Tensors2,
    Tensors3,
    Tensors4,
    Tensors5,
    /// `(Tensor, Tensor, int)`
    TensorPairInt,
    /// `(Tensor, Tensor, Tensor, int)`
    TensorsAndInt,
    /// `(Tensor, Tensor, float, int)`
    TensorsFloatInt,
    /// `(float, float)`
    FloatPair,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ElemType {
    Bool,
    Int,
    Float,
    Scalar,
    ScalarType,
    QScheme,
    Tensor,
    TensorList,
}

impl ReturnKind {
    /// Parse a schema return clause.
    ///
    /// Accepts `()`, a bare type, or a parenthesised comma separated list.
    /// Return names and alias annotations are ignored, so
    /// `(Tensor(a!) values, Tensor(b!) indices)` parses as [`ReturnKind::Tensors2`].
    pub fn parse(returns: &str) -> Result<Self> {
        let clause = returns.trim();
        let inner = match clause.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
            Some(inner) => inner.trim(),
            None => clause,
        };
        if inner.is_empty() {
            return Ok(ReturnKind::None);
        }

        let types = split_top_level(inner)
            .into_iter()
            .map(|item| parse_elem(item).ok_or_else(|| MinitensorError::unsupported_return(clause)))
            .collect::<Result<Vec<_>>>()?;

        use ElemType as E;
        let kind = match types.as_slice() {
            [E::Bool] => ReturnKind::Bool,
            [E::Int] => ReturnKind::Int,
            [E::Float] => ReturnKind::Float,
            [E::Scalar] => ReturnKind::Scalar,
            [E::ScalarType] => ReturnKind::ScalarType,
            [E::QScheme] => ReturnKind::QScheme,
            [E::Tensor] => ReturnKind::Tensor,
            [E::TensorList] => ReturnKind::TensorList,
            [E::Tensor, E::Tensor] => ReturnKind::Tensors2,
            [E::Tensor, E::Tensor, E::Tensor] => ReturnKind::Tensors3,
            [E::Tensor, E::Tensor, E::Tensor, E::Tensor] => ReturnKind::Tensors4,
            [E::Tensor, E::Tensor, E::Tensor, E::Tensor, E::Tensor] => ReturnKind::Tensors5,
            [E::Tensor, E::Tensor, E::Int] => ReturnKind::TensorPairInt,
            [E::Tensor, E::Tensor, E::Tensor, E::Int] => ReturnKind::TensorsAndInt,
            [E::Tensor, E::Tensor, E::Float, E::Int] => ReturnKind::TensorsFloatInt,
            [E::Float, E::Float] => ReturnKind::FloatPair,
            _ => return Err(MinitensorError::unsupported_return(clause)),
        };
        Ok(kind)
    }

    /// Length of the host sequence produced for this kind, `None` for single
    /// values and for tensor lists whose length is only known at runtime.
    pub fn arity(self) -> Option<usize> {
        match self {
            ReturnKind::Tensors2 | ReturnKind::FloatPair => Some(2),
            ReturnKind::Tensors3 | ReturnKind::TensorPairInt => Some(3),
            ReturnKind::Tensors4 | ReturnKind::TensorsAndInt | ReturnKind::TensorsFloatInt => {
                Some(4)
            }
            ReturnKind::Tensors5 => Some(5),
            _ => None,
        }
    }

    /// Whether the host representation is an ordered sequence
    pub fn is_sequence(self) -> bool {
        self == ReturnKind::TensorList || self.arity().is_some()
    }
}

impl fmt::Display for ReturnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ReturnKind::None => "()",
            ReturnKind::Bool => "bool",
            ReturnKind::Int => "int",
            ReturnKind::Float => "float",
            ReturnKind::Scalar => "Scalar",
            ReturnKind::ScalarType => "ScalarType",
            ReturnKind::QScheme => "QScheme",
            ReturnKind::Tensor => "Tensor",
            ReturnKind::TensorList => "Tensor[]",
            ReturnKind::Tensors2 => "(Tensor, Tensor)",
            ReturnKind::Tensors3 => "(Tensor, Tensor, Tensor)",
            ReturnKind::Tensors4 => "(Tensor, Tensor, Tensor, Tensor)",
            ReturnKind::Tensors5 => "(Tensor, Tensor, Tensor, Tensor, Tensor)",
            ReturnKind::TensorPairInt => "(Tensor, Tensor, int)",
            ReturnKind::TensorsAndInt => "(Tensor, Tensor, Tensor, int)",
            ReturnKind::TensorsFloatInt => "(Tensor, Tensor, float, int)",
            ReturnKind::FloatPair => "(float, float)",
        };
        f.write_str(text)
    }
}

fn split_top_level(list: &str) -> Vec<&str> {
    let mut items = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in list.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                items.push(list[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    items.push(list[start..].trim());
    items
}

fn parse_elem(item: &str) -> Option<ElemType> {
    // Drop the alias annotation first, it may contain spaces.
    let stripped;
    let item = match item.find('(') {
        Some(open) => {
            let close = open + item[open..].find(')')?;
            stripped = format!("{}{}", &item[..open], &item[close + 1..]);
            stripped.as_str()
        }
        None => item,
    };
    // Then the return name
    let ty = item.split_whitespace().next()?;
    match ty.strip_suffix("[]") {
        Some(base) => parse_base(base, "[]"),
        None => parse_base(ty, ""),
    }
}

fn parse_base(base: &str, suffix: &str) -> Option<ElemType> {
    match (base, suffix) {
        ("bool", "") => Some(ElemType::Bool),
        ("int", "") => Some(ElemType::Int),
        ("float", "") => Some(ElemType::Float),
        ("Scalar", "") => Some(ElemType::Scalar),
        ("ScalarType", "") => Some(ElemType::ScalarType),
        ("QScheme", "") => Some(ElemType::QScheme),
        ("Tensor", "") => Some(ElemType::Tensor),
        ("Tensor", "[]") => Some(ElemType::TensorList),
        _ => None,
    }
}

/// A native return value whose shape is only known at runtime
#[derive(Debug, Clone)]
pub enum NativeOutput {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Scalar(Scalar),
    ScalarType(DataType),
    QScheme(QScheme),
    Tensor(Tensor),
    TensorList(Vec<Tensor>),
    Tensors2(Tensor, Tensor),
    Tensors3(Tensor, Tensor, Tensor),
    Tensors4(Tensor, Tensor, Tensor, Tensor),
    Tensors5(Tensor, Tensor, Tensor, Tensor, Tensor),
    TensorPairInt(Tensor, Tensor, i64),
    TensorsAndInt(Tensor, Tensor, Tensor, i64),
    TensorsFloatInt(Tensor, Tensor, f64, i64),
    FloatPair(f64, f64),
}

impl NativeOutput {
    pub fn kind(&self) -> ReturnKind {
        match self {
            NativeOutput::None => ReturnKind::None,
            NativeOutput::Bool(_) => ReturnKind::Bool,
            NativeOutput::Int(_) => ReturnKind::Int,
            NativeOutput::Float(_) => ReturnKind::Float,
            NativeOutput::Scalar(_) => ReturnKind::Scalar,
            NativeOutput::ScalarType(_) => ReturnKind::ScalarType,
            NativeOutput::QScheme(_) => ReturnKind::QScheme,
            NativeOutput::Tensor(_) => ReturnKind::Tensor,
            NativeOutput::TensorList(_) => ReturnKind::TensorList,
            NativeOutput::Tensors2(..) => ReturnKind::Tensors2,
            NativeOutput::Tensors3(..) => ReturnKind::Tensors3,
            NativeOutput::Tensors4(..) => ReturnKind::Tensors4,
            NativeOutput::Tensors5(..) => ReturnKind::Tensors5,
            NativeOutput::TensorPairInt(..) => ReturnKind::TensorPairInt,
            NativeOutput::TensorsAndInt(..) => ReturnKind::TensorsAndInt,
            NativeOutput::TensorsFloatInt(..) => ReturnKind::TensorsFloatInt,
            NativeOutput::FloatPair(..) => ReturnKind::FloatPair,
        }
    }

    /// Fail unless this output has the declared shape
    pub fn expect_kind(&self, declared: ReturnKind) -> Result<()> {
        let actual = self.kind();
        if actual == declared {
            Ok(())
        } else {
            Err(MinitensorError::invalid_operation(format!(
                "native function declared return {declared} but produced {actual}"
            )))
        }
    }
}

impl From<()> for NativeOutput {
    fn from(_: ()) -> Self {
        NativeOutput::None
    }
}

impl From<bool> for NativeOutput {
    fn from(value: bool) -> Self {
        NativeOutput::Bool(value)
    }
}

impl From<i64> for NativeOutput {
    fn from(value: i64) -> Self {
        NativeOutput::Int(value)
    }
}

impl From<f64> for NativeOutput {
    fn from(value: f64) -> Self {
        NativeOutput::Float(value)
    }
}

impl From<Scalar> for NativeOutput {
    fn from(value: Scalar) -> Self {
        NativeOutput::Scalar(value)
    }
}

impl From<DataType> for NativeOutput {
    fn from(value: DataType) -> Self {
        NativeOutput::ScalarType(value)
    }
}

impl From<QScheme> for NativeOutput {
    fn from(value: QScheme) -> Self {
        NativeOutput::QScheme(value)
    }
}

impl From<Tensor> for NativeOutput {
    fn from(value: Tensor) -> Self {
        NativeOutput::Tensor(value)
    }
}

impl From<Vec<Tensor>> for NativeOutput {
    fn from(value: Vec<Tensor>) -> Self {
        NativeOutput::TensorList(value)
    }
}

impl From<(Tensor, Tensor)> for NativeOutput {
    fn from((a, b): (Tensor, Tensor)) -> Self {
        NativeOutput::Tensors2(a, b)
    }
}

impl From<(Tensor, Tensor, Tensor)> for NativeOutput {
    fn from((a, b, c): (Tensor, Tensor, Tensor)) -> Self {
        NativeOutput::Tensors3(a, b, c)
    }
}

impl From<(Tensor, Tensor, Tensor, Tensor)> for NativeOutput {
    fn from((a, b, c, d): (Tensor, Tensor, Tensor, Tensor)) -> Self {
        NativeOutput::Tensors4(a, b, c, d)
    }
}

impl From<(Tensor, Tensor, Tensor, Tensor, Tensor)> for NativeOutput {
    fn from((a, b, c, d, e): (Tensor, Tensor, Tensor, Tensor, Tensor)) -> Self {
        NativeOutput::Tensors5(a, b, c, d, e)
    }
}

impl From<(Tensor, Tensor, i64)> for NativeOutput {
    fn from((a, b, n): (Tensor, Tensor, i64)) -> Self {
        NativeOutput::TensorPairInt(a, b, n)
    }
}

impl From<(Tensor, Tensor, Tensor, i64)> for NativeOutput {
    fn from((a, b, c, n): (Tensor, Tensor, Tensor, i64)) -> Self {
        NativeOutput::TensorsAndInt(a, b, c, n)
    }
}

impl From<(Tensor, Tensor, f64, i64)> for NativeOutput {
    fn from((a, b, x, n): (Tensor, Tensor, f64, i64)) -> Self {
        NativeOutput::TensorsFloatInt(a, b, x, n)
    }
}

impl From<(f64, f64)> for NativeOutput {
    fn from((x, y): (f64, f64)) -> Self {
        NativeOutput::FloatPair(x, y)
    }
}
