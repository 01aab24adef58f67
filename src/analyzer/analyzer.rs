use std::collections::HashMap;

use crate::{
    ast::{
        ast::{Expr, ExprType, Program, Stmt},
        expressions::{ArithmeticExpr, BooleanExpr, CallExpr},
        statements::{InstructionStmt, LabelStmt},
    },
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::rules::{
    constant_value, function_params, has_direction, instruction_params, positive_params, Param,
    VALID_COLORS,
};

/// Walks a program once to collect labels, then again to validate it.
///
/// Variables are typed by their last assignment in source order. Jumps are
/// not followed.
pub struct SemanticAnalyzer<'a> {
    variables: HashMap<String, ExprType>,
    labels: HashMap<&'a str, &'a LabelStmt>,
    canvas_size: i64,
    spawned: bool,
    diagnostics: Vec<Error>,
}

impl<'a> SemanticAnalyzer<'a> {
    pub fn new(canvas_size: i64) -> Self {
        SemanticAnalyzer {
            variables: HashMap::new(),
            labels: HashMap::new(),
            canvas_size,
            spawned: false,
            diagnostics: vec![],
        }
    }

    fn error(&mut self, error_impl: ErrorImpl, position: Position) {
        self.diagnostics.push(Error::new(error_impl, position));
    }

    fn warning(&mut self, error_impl: ErrorImpl, position: Position) {
        self.diagnostics.push(Error::warning(error_impl, position));
    }

    /// Runs both passes over `program`.
    pub fn analyze_program(&mut self, program: &'a Program) {
        match program.body.first() {
            Some(Stmt::Instruction(stmt)) if stmt.name == "Spawn" => {}
            first => {
                let position = first.map_or(program.position, Stmt::get_position);
                self.error(ErrorImpl::MissingSpawn, position);
                return;
            }
        }

        self.collect_labels(program);

        for stmt in program {
            self.check_stmt(stmt);
        }
    }

    fn collect_labels(&mut self, program: &'a Program) {
        for stmt in program {
            if let Stmt::Label(label) = stmt {
                match self.labels.get(label.name.as_str()) {
                    Some(first) => {
                        let line = first.position.line;
                        self.error(
                            ErrorImpl::DuplicateLabel {
                                label: label.name.clone(),
                                line,
                            },
                            label.position,
                        );
                    }
                    None => {
                        self.labels.insert(label.name.as_str(), label);
                    }
                }

                self.collect_labels(&label.body);
            }
        }
    }

    fn check_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Assignment(stmt) => {
                let expr_type = self.check_expr(&stmt.value);
                self.variables.insert(stmt.identifier.clone(), expr_type);
            }
            Stmt::Label(label) => {
                for stmt in &label.body {
                    self.check_stmt(stmt);
                }
            }
            Stmt::Instruction(stmt) => self.check_instruction(stmt),
            Stmt::FunctionCall(stmt) => self.check_call(&stmt.call),
        }
    }

    fn check_instruction(&mut self, stmt: &InstructionStmt) {
        let params = match instruction_params(&stmt.name) {
            Some(params) => params,
            None => {
                self.error(
                    ErrorImpl::UnknownInstruction {
                        name: stmt.name.clone(),
                    },
                    stmt.position,
                );
                self.check_all(&stmt.arguments);
                return;
            }
        };

        if stmt.name == "Spawn" {
            if self.spawned {
                self.error(ErrorImpl::MisplacedSpawn, stmt.position);
            }
            self.spawned = true;
        }

        if !self.check_arguments(&stmt.name, params, &stmt.arguments, stmt.position) {
            return;
        }

        if stmt.name == "Spawn" {
            self.check_spawn_bounds(&stmt.arguments);
        }

        if has_direction(&stmt.name) {
            self.check_direction(&stmt.name, &stmt.arguments, stmt.position);
        }

        for (index, argument) in positive_params(&stmt.name) {
            if let Some(value) = constant_value(&stmt.arguments[*index]) {
                if value <= 0 {
                    self.error(
                        ErrorImpl::NonPositiveArgument {
                            callee: stmt.name.clone(),
                            argument: String::from(*argument),
                            value,
                        },
                        stmt.arguments[*index].get_position(),
                    );
                }
            }
        }
    }

    fn check_call(&mut self, call: &CallExpr) {
        match function_params(&call.name) {
            Some(params) => {
                self.check_arguments(&call.name, params, &call.arguments, call.position);
            }
            None => {
                self.error(
                    ErrorImpl::UnknownFunction {
                        name: call.name.clone(),
                    },
                    call.position,
                );
                self.check_all(&call.arguments);
            }
        }
    }

    /// Checks arity, then each argument against its parameter. Returns false
    /// when the arity is wrong.
    fn check_arguments(
        &mut self,
        callee: &str,
        params: &[Param],
        arguments: &[Expr],
        position: Position,
    ) -> bool {
        if params.len() != arguments.len() {
            self.error(
                ErrorImpl::ArgumentCountMismatch {
                    callee: String::from(callee),
                    expected: params.len(),
                    received: arguments.len(),
                },
                position,
            );
            self.check_all(arguments);
            return false;
        }

        for (param, argument) in params.iter().zip(arguments) {
            match param {
                Param::Numeric => self.require_type(argument, ExprType::Arithmetic),
                Param::Condition => self.require_type(argument, ExprType::Boolean),
                Param::Color => self.require_color(callee, argument),
                Param::Label => self.require_label(argument),
            }
        }

        true
    }

    fn check_all(&mut self, arguments: &[Expr]) {
        for argument in arguments {
            self.check_expr(argument);
        }
    }

    fn require_type(&mut self, expr: &Expr, expected: ExprType) {
        let Some(received) = self.resolve_expr(expr) else {
            return;
        };
        if received != expected {
            self.error(
                ErrorImpl::TypeMatchError { expected, received },
                expr.get_position(),
            );
        }
    }

    fn require_color(&mut self, callee: &str, expr: &Expr) {
        match expr.ungrouped() {
            Expr::String(color) => {
                if !VALID_COLORS.contains(&color.value.as_str()) {
                    self.error(
                        ErrorImpl::InvalidColor {
                            color: color.value.clone(),
                        },
                        color.position,
                    );
                }
            }
            _ => {
                self.check_expr(expr);
                self.error(
                    ErrorImpl::ExpectedColorLiteral {
                        callee: String::from(callee),
                    },
                    expr.get_position(),
                );
            }
        }
    }

    fn require_label(&mut self, expr: &Expr) {
        match expr.ungrouped() {
            Expr::String(label) => {
                if !self.labels.contains_key(label.value.as_str()) {
                    self.error(
                        ErrorImpl::UndefinedLabel {
                            label: label.value.clone(),
                        },
                        label.position,
                    );
                }
            }
            _ => self.error(ErrorImpl::ExpectedLabelName, expr.get_position()),
        }
    }

    fn check_direction(&mut self, callee: &str, arguments: &[Expr], position: Position) {
        let x = constant_value(&arguments[0]);
        let y = constant_value(&arguments[1]);

        for (value, argument) in [(x, &arguments[0]), (y, &arguments[1])] {
            if let Some(value) = value {
                if !(-1..=1).contains(&value) {
                    self.error(
                        ErrorImpl::InvalidDirection {
                            callee: String::from(callee),
                            value,
                        },
                        argument.get_position(),
                    );
                }
            }
        }

        if x == Some(0) && y == Some(0) {
            self.error(
                ErrorImpl::ZeroDirection {
                    callee: String::from(callee),
                },
                position,
            );
        }
    }

    fn check_spawn_bounds(&mut self, arguments: &[Expr]) {
        for argument in arguments {
            if let Some(coordinate) = constant_value(argument) {
                if coordinate < 0 || coordinate >= self.canvas_size {
                    self.warning(
                        ErrorImpl::SpawnOutOfBounds {
                            coordinate,
                            canvas_size: self.canvas_size,
                        },
                        argument.get_position(),
                    );
                }
            }
        }
    }

    /// Checks `expr` and returns its category. An undefined variable counts
    /// as arithmetic.
    pub fn check_expr(&mut self, expr: &Expr) -> ExprType {
        self.resolve_expr(expr).unwrap_or(ExprType::Arithmetic)
    }

    /// Checks `expr` and returns its category, or `None` when it is a
    /// variable that was already reported as undefined.
    fn resolve_expr(&mut self, expr: &Expr) -> Option<ExprType> {
        match expr {
            Expr::String(_) => Some(ExprType::String),
            Expr::Boolean(expr) => {
                self.check_boolean(expr);
                Some(ExprType::Boolean)
            }
            Expr::Arithmetic(expr) => self.check_arithmetic(expr),
            Expr::Grouping(grouping) => self.resolve_expr(&grouping.expr),
        }
    }

    fn check_boolean(&mut self, expr: &BooleanExpr) {
        match expr {
            BooleanExpr::Or(logical) | BooleanExpr::And(logical) => {
                self.check_expr(&logical.left);
                self.check_expr(&logical.right);
            }
            BooleanExpr::Comparison(comparison) => {
                self.check_expr(&comparison.left);
                self.check_expr(&comparison.right);
            }
            BooleanExpr::Literal(_) => {}
            BooleanExpr::Grouping(grouping) => {
                self.check_expr(&grouping.expr);
            }
        }
    }

    /// A variable reference takes the category of its last assignment, every
    /// other arithmetic node is arithmetic.
    fn check_arithmetic(&mut self, expr: &ArithmeticExpr) -> Option<ExprType> {
        match expr {
            ArithmeticExpr::Number(_) => Some(ExprType::Arithmetic),
            ArithmeticExpr::Symbol(symbol) => match self.variables.get(&symbol.value) {
                Some(expr_type) => Some(*expr_type),
                None => {
                    self.error(
                        ErrorImpl::UndefinedVariable {
                            variable: symbol.value.clone(),
                        },
                        symbol.position,
                    );
                    None
                }
            },
            ArithmeticExpr::Call(call) => {
                self.check_call(call);
                Some(ExprType::Arithmetic)
            }
            ArithmeticExpr::Additive(binary) | ArithmeticExpr::Multiplicative(binary) => {
                self.require_arithmetic(&binary.left);
                self.require_arithmetic(&binary.right);
                Some(ExprType::Arithmetic)
            }
            ArithmeticExpr::Power(power) => {
                self.require_arithmetic(&power.base);
                self.require_arithmetic(&power.exponent);
                Some(ExprType::Arithmetic)
            }
            ArithmeticExpr::Prefix(prefix) => {
                self.require_arithmetic(&prefix.right_expr);
                Some(ExprType::Arithmetic)
            }
            ArithmeticExpr::Grouping(grouping) => self.check_arithmetic(&grouping.expr),
        }
    }

    fn require_arithmetic(&mut self, expr: &ArithmeticExpr) {
        let Some(received) = self.check_arithmetic(expr) else {
            return;
        };
        if received != ExprType::Arithmetic {
            self.error(
                ErrorImpl::TypeMatchError {
                    expected: ExprType::Arithmetic,
                    received,
                },
                expr.get_position(),
            );
        }
    }
}

/// Validates `program`, returning whether it is free of errors together
/// with every diagnostic found. Warnings do not affect the flag.
pub fn analyze(program: &Program, canvas_size: i64) -> (bool, Vec<Error>) {
    let mut analyzer = SemanticAnalyzer::new(canvas_size);
    analyzer.analyze_program(program);

    let ok = !analyzer.diagnostics.iter().any(Error::is_error);

    tracing::debug!(
        "Analyzed {} statements with {} labels and {} diagnostics",
        program.len(),
        analyzer.labels.len(),
        analyzer.diagnostics.len()
    );

    (ok, analyzer.diagnostics)
}
