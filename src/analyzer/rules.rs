use crate::ast::{ast::Expr, expressions::ArithmeticExpr};

/// Color names accepted by `Color` and the color query functions.
pub const VALID_COLORS: [&str; 9] = [
    "Red",
    "Blue",
    "Green",
    "Yellow",
    "Orange",
    "Purple",
    "Black",
    "White",
    "Transparent",
];

/// What an argument position requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
    Numeric,
    Color,
    Label,
    Condition,
}

pub fn instruction_params(name: &str) -> Option<&'static [Param]> {
    match name {
        "Spawn" => Some(&[Param::Numeric, Param::Numeric]),
        "Color" => Some(&[Param::Color]),
        "Size" => Some(&[Param::Numeric]),
        "DrawLine" | "DrawCircle" => Some(&[Param::Numeric; 3]),
        "DrawRectangle" => Some(&[Param::Numeric; 5]),
        "Fill" => Some(&[]),
        "GoTo" => Some(&[Param::Label, Param::Condition]),
        _ => None,
    }
}

pub fn function_params(name: &str) -> Option<&'static [Param]> {
    match name {
        "GetActualX" | "GetActualY" | "GetCanvasSize" => Some(&[]),
        "GetColorCount" => Some(&[
            Param::Color,
            Param::Numeric,
            Param::Numeric,
            Param::Numeric,
            Param::Numeric,
        ]),
        "IsBrushColor" => Some(&[Param::Color]),
        "IsBrushSize" => Some(&[Param::Numeric]),
        "IsCanvasColor" => Some(&[Param::Color, Param::Numeric, Param::Numeric]),
        _ => None,
    }
}

/// Instructions whose first two arguments are a direction in x and y.
pub fn has_direction(name: &str) -> bool {
    matches!(name, "DrawLine" | "DrawCircle" | "DrawRectangle")
}

/// Argument positions that must be greater than zero when constant.
pub fn positive_params(name: &str) -> &'static [(usize, &'static str)] {
    match name {
        "Size" => &[(0, "size")],
        "DrawLine" => &[(2, "distance")],
        "DrawCircle" => &[(2, "radius")],
        "DrawRectangle" => &[(2, "distance"), (3, "width"), (4, "height")],
        _ => &[],
    }
}

/// Value of an integer literal, looking through unary minus and parentheses.
pub fn constant_value(expr: &Expr) -> Option<i64> {
    match expr {
        Expr::Arithmetic(expr) => arithmetic_constant(expr),
        _ => None,
    }
}

fn arithmetic_constant(expr: &ArithmeticExpr) -> Option<i64> {
    match expr {
        ArithmeticExpr::Number(number) => Some(number.value),
        ArithmeticExpr::Prefix(prefix) => {
            let value = arithmetic_constant(&prefix.right_expr)?;
            if prefix.negated {
                value.checked_neg()
            } else {
                Some(value)
            }
        }
        ArithmeticExpr::Grouping(grouping) => arithmetic_constant(&grouping.expr),
        _ => None,
    }
}
