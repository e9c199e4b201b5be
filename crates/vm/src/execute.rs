//! Two-phase execution: variable allocation, then instruction dispatch.
//!
//! Phase 1 walks the variable table in order, validates each declaration,
//! and pushes one zero-initialized slot per variable. Phase 2 walks the
//! instruction list in file order; every opcode validates its own arity
//! and operand shapes before mutating anything. The first failure in
//! either phase halts the run and marks the instance invalid; mutations
//! made before the failing instruction are kept for diagnostics.

use std::io::{self, Write};

use stackscript_common::{is_identifier, Opcode};

use crate::error::{ExecError, ScriptError};
use crate::script::Script;

/// PRINT parameter that emits exactly one newline.
const NEWLINE_SENTINEL: &str = "system::newline";

impl Script {
    /// Load and execute the script, writing PRINT output to stdout.
    pub fn interpret(&mut self) -> Result<(), ScriptError> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.interpret_to(&mut handle)
    }

    /// Load and execute the script, writing PRINT output to `sink`.
    ///
    /// Every invocation starts from scratch: previous tables and stack
    /// contents are discarded before the source is re-parsed.
    pub fn interpret_to<W: Write>(&mut self, sink: &mut W) -> Result<(), ScriptError> {
        self.reset();
        let result = self.load_and_run(sink);
        if result.is_err() {
            self.mark_invalid();
        }
        result
    }

    fn load_and_run<W: Write>(&mut self, sink: &mut W) -> Result<(), ScriptError> {
        let loaded = stackscript_loader::load(self.source())?;
        self.install(loaded);
        self.allocate_variables()?;
        self.run_instructions(sink)
    }

    /// Phase 1: allocate one stack slot per declared variable, in table
    /// order.
    fn allocate_variables(&mut self) -> Result<(), ExecError> {
        for i in 0..self.variables.len() {
            let line = self.variables[i].line;
            match self.variables[i].opcode {
                Opcode::Int => {
                    if self.variables[i].parameters.len() != 1 {
                        return Err(ExecError::MalformedDeclaration {
                            mnemonic: "INT",
                            reason: "expects exactly one parameter (variable name)",
                            line,
                        });
                    }
                    if !is_identifier(&self.variables[i].parameters[0]) {
                        return Err(ExecError::MalformedDeclaration {
                            mnemonic: "INT",
                            reason: "expects a variable name, not an integer constant",
                            line,
                        });
                    }
                    self.push(0, "INT", line)?;
                    self.variables[i].slot = Some(self.stack.len() - 1);
                }
                // Future variable-type kinds follow the same
                // validate-then-allocate pattern here.
                _ => {}
            }
        }
        Ok(())
    }

    /// Phase 2: dispatch each instruction in file order.
    fn run_instructions<W: Write>(&mut self, sink: &mut W) -> Result<(), ScriptError> {
        for i in 0..self.instructions.len() {
            match self.instructions[i].opcode {
                Opcode::Push => self.exec_push(i)?,
                Opcode::Pop => self.exec_pop(i)?,
                Opcode::Sum => self.exec_sum(i)?,
                Opcode::Sub => self.exec_sub(i)?,
                Opcode::Mov => self.exec_mov(i)?,
                Opcode::Print => self.exec_print(i, sink)?,
                _ => {}
            }
        }
        Ok(())
    }

    fn exec_push(&mut self, index: usize) -> Result<(), ExecError> {
        let instr = &self.instructions[index];
        let line = instr.line;
        if instr.parameters.len() != 1 {
            return Err(ExecError::MalformedInstruction {
                mnemonic: "PUSH",
                reason: "expects exactly one parameter (integer constant)",
                line,
            });
        }
        let value = instr.parameters[0].parse::<i32>().map_err(|_| {
            ExecError::MalformedInstruction {
                mnemonic: "PUSH",
                reason: "expects an integer constant parameter",
                line,
            }
        })?;
        self.push(value, "PUSH", line)
    }

    fn exec_pop(&mut self, index: usize) -> Result<(), ExecError> {
        let instr = &self.instructions[index];
        let line = instr.line;
        if !instr.parameters.is_empty() {
            return Err(ExecError::MalformedInstruction {
                mnemonic: "POP",
                reason: "expects no parameters",
                line,
            });
        }
        if self.stack.len() <= 1 {
            return Err(ExecError::MalformedInstruction {
                mnemonic: "POP",
                reason: "expects at least one value on the stack above the base",
                line,
            });
        }
        self.stack.pop();
        Ok(())
    }

    fn exec_sum(&mut self, index: usize) -> Result<(), ExecError> {
        let instr = &self.instructions[index];
        let line = instr.line;
        if instr.parameters.len() != 1 {
            return Err(ExecError::MalformedInstruction {
                mnemonic: "SUM",
                reason: "expects exactly one parameter (destination variable)",
                line,
            });
        }
        if !is_identifier(&instr.parameters[0]) {
            return Err(ExecError::MalformedInstruction {
                mnemonic: "SUM",
                reason: "expects a variable name, not an integer constant",
                line,
            });
        }
        if self.stack.len() < 3 {
            return Err(ExecError::MalformedInstruction {
                mnemonic: "SUM",
                reason: "expects at least two values on the stack above the base",
                line,
            });
        }
        let name = instr.parameters[0].clone();

        let top = self.stack.len();
        let sum = self.stack[top - 1].wrapping_add(self.stack[top - 2]);
        self.stack.truncate(top - 2);

        match self.find_slot(&name) {
            Some(slot) => self.write_slot(slot, sum, "SUM", line),
            None => Err(ExecError::VariableNotFound {
                mnemonic: "SUM",
                name,
                line,
            }),
        }
    }

    fn exec_sub(&mut self, index: usize) -> Result<(), ExecError> {
        let instr = &self.instructions[index];
        let line = instr.line;
        if instr.parameters.len() != 2 {
            return Err(ExecError::MalformedInstruction {
                mnemonic: "SUB",
                reason: "expects two parameters (destination variable, integer constant)",
                line,
            });
        }
        if !is_identifier(&instr.parameters[0]) {
            return Err(ExecError::MalformedInstruction {
                mnemonic: "SUB",
                reason: "expects a variable name, not an integer constant",
                line,
            });
        }
        let amount = instr.parameters[1].parse::<i32>().map_err(|_| {
            ExecError::MalformedInstruction {
                mnemonic: "SUB",
                reason: "expects an integer constant as its second parameter",
                line,
            }
        })?;
        let name = instr.parameters[0].clone();

        match self.find_slot(&name) {
            Some(slot) => {
                let current = self.read_slot(slot, "SUB", line)?;
                self.write_slot(slot, current.wrapping_sub(amount), "SUB", line)
            }
            None => Err(ExecError::VariableNotFound {
                mnemonic: "SUB",
                name,
                line,
            }),
        }
    }

    fn exec_mov(&mut self, index: usize) -> Result<(), ExecError> {
        let instr = &self.instructions[index];
        let line = instr.line;
        if instr.parameters.len() != 2 {
            return Err(ExecError::MalformedInstruction {
                mnemonic: "MOV",
                reason: "expects two parameters (destination variable, integer constant)",
                line,
            });
        }
        if !is_identifier(&instr.parameters[0]) {
            return Err(ExecError::MalformedInstruction {
                mnemonic: "MOV",
                reason: "expects a variable name, not an integer constant",
                line,
            });
        }
        let value = instr.parameters[1].parse::<i32>().map_err(|_| {
            ExecError::MalformedInstruction {
                mnemonic: "MOV",
                reason: "expects an integer constant as its second parameter",
                line,
            }
        })?;
        let name = instr.parameters[0].clone();

        match self.find_slot(&name) {
            Some(slot) => self.write_slot(slot, value, "MOV", line),
            None => Err(ExecError::VariableNotFound {
                mnemonic: "MOV",
                name,
                line,
            }),
        }
    }

    fn exec_print<W: Write>(&mut self, index: usize, sink: &mut W) -> Result<(), ScriptError> {
        let instr = &self.instructions[index];
        let line = instr.line;
        if instr.parameters.is_empty() {
            return Err(ExecError::MalformedInstruction {
                mnemonic: "PRINT",
                reason: "expects at least one parameter",
                line,
            }
            .into());
        }
        let joined = instr.parameters.join(" ");

        // Backtick-delimited string literal; both delimiters required.
        if let Some(rest) = joined.strip_prefix('`') {
            let Some(text) = rest.strip_suffix('`') else {
                return Err(ExecError::MalformedStringLiteral { line }.into());
            };
            return write_out(sink, text);
        }

        if joined == NEWLINE_SENTINEL {
            return write_out(sink, "\n");
        }

        if let Ok(value) = joined.parse::<i32>() {
            return write_out(sink, &value.to_string());
        }

        if !is_identifier(&joined) {
            return Err(ExecError::MalformedInstruction {
                mnemonic: "PRINT",
                reason: "expects a string literal, an integer constant, or a variable name",
                line,
            }
            .into());
        }

        match self.find_slot(&joined) {
            Some(slot) => {
                let value = self.read_slot(slot, "PRINT", line)?;
                write_out(sink, &value.to_string())
            }
            None => Err(ExecError::VariableNotFound {
                mnemonic: "PRINT",
                name: joined,
                line,
            }
            .into()),
        }
    }
}

fn write_out<W: Write>(sink: &mut W, text: &str) -> Result<(), ScriptError> {
    sink.write_all(text.as_bytes()).map_err(|e| ScriptError::Io {
        message: format!("cannot write PRINT output: {e}"),
    })
}
