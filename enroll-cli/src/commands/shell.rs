//! `enroll shell` — the interactive menu loop (default when no subcommand).
//!
//! Accepts the numbered menu (`1`–`4`, prompting for ids) as well as typed
//! commands such as `register S001 C101`. Failed lookups and full courses are
//! reported and the loop keeps going; EOF or `exit` ends it.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use enroll_core::{CourseCode, Registry, StudentId};

use super::{drop_message, register_message};

const MENU: &str = "\
1. Display Available Courses
2. Register Student for Course
3. Remove Student from Course
4. Exit
Commands: list | students | roster <code> | register <student> <code> | drop <student> <code> | help | exit";

/// One parsed line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Empty,
    Help,
    ListCourses,
    ListStudents,
    Roster(CourseCode),
    /// Menu `2`: ids are prompted for.
    RegisterPrompt,
    Register(StudentId, CourseCode),
    /// Menu `3`: ids are prompted for.
    DropPrompt,
    Drop(StudentId, CourseCode),
    Exit,
}

impl FromStr for ShellCommand {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((head, rest)) = words.split_first() else {
            return Ok(Self::Empty);
        };
        match (head.to_ascii_lowercase().as_str(), rest) {
            ("1" | "list" | "courses", []) => Ok(Self::ListCourses),
            ("2", []) => Ok(Self::RegisterPrompt),
            ("3", []) => Ok(Self::DropPrompt),
            ("4" | "exit" | "quit", []) => Ok(Self::Exit),
            ("help" | "?", []) => Ok(Self::Help),
            ("students", []) => Ok(Self::ListStudents),
            ("roster", [code]) => Ok(Self::Roster(CourseCode::from(*code))),
            ("register", [student, code]) => Ok(Self::Register(
                StudentId::from(*student),
                CourseCode::from(*code),
            )),
            ("drop", [student, code]) => {
                Ok(Self::Drop(StudentId::from(*student), CourseCode::from(*code)))
            }
            ("roster", _) => Err("usage: roster <course-code>".to_string()),
            ("register", _) => Err("usage: register <student-id> <course-code>".to_string()),
            ("drop", _) => Err("usage: drop <student-id> <course-code>".to_string()),
            _ => Err("Invalid choice.".to_string()),
        }
    }
}

/// Run the shell on the process's stdin/stdout.
pub fn run_stdio(registry: &mut Registry) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(registry, stdin.lock(), &mut stdout.lock())
}

/// Run the shell until `exit` or end of input.
pub fn run<R: BufRead, W: Write>(registry: &mut Registry, mut input: R, out: &mut W) -> io::Result<()> {
    writeln!(out, "{MENU}")?;
    loop {
        write!(out, "\nEnter your choice: ")?;
        out.flush()?;
        let Some(line) = read_line(&mut input)? else {
            break;
        };

        let command = match line.parse::<ShellCommand>() {
            Ok(command) => command,
            Err(message) => {
                writeln!(out, "{message}")?;
                continue;
            }
        };
        tracing::debug!(?command, "shell command");

        match command {
            ShellCommand::Empty => {}
            ShellCommand::Help => writeln!(out, "{MENU}")?,
            ShellCommand::ListCourses => list_courses(registry, out)?,
            ShellCommand::ListStudents => list_students(registry, out)?,
            ShellCommand::Roster(code) => show_roster(registry, &code, out)?,
            ShellCommand::Register(student, code) => register(registry, &student, &code, out)?,
            ShellCommand::Drop(student, code) => drop_course(registry, &student, &code, out)?,
            ShellCommand::RegisterPrompt => {
                let Some((student, code)) = prompt_ids(&mut input, out)? else {
                    break;
                };
                register(registry, &student, &code, out)?;
            }
            ShellCommand::DropPrompt => {
                let Some((student, code)) = prompt_ids(&mut input, out)? else {
                    break;
                };
                drop_course(registry, &student, &code, out)?;
            }
            ShellCommand::Exit => break,
        }
    }
    Ok(())
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}

fn prompt_ids<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<(StudentId, CourseCode)>> {
    write!(out, "Enter Student ID: ")?;
    out.flush()?;
    let Some(student) = read_line(input)? else {
        return Ok(None);
    };
    write!(out, "Enter Course Code: ")?;
    out.flush()?;
    let Some(code) = read_line(input)? else {
        return Ok(None);
    };
    Ok(Some((StudentId::from(student), CourseCode::from(code))))
}

fn list_courses<W: Write>(registry: &Registry, out: &mut W) -> io::Result<()> {
    writeln!(out, "Available Courses:")?;
    for summary in registry.list_courses() {
        if let Some(course) = registry.find_course(&summary.code) {
            writeln!(out, "{course}")?;
        }
    }
    Ok(())
}

fn list_students<W: Write>(registry: &Registry, out: &mut W) -> io::Result<()> {
    for student in registry.list_students() {
        let courses: Vec<String> = student.enrolled().iter().map(|c| c.to_string()).collect();
        writeln!(out, "{student}, Courses: [{}]", courses.join(", "))?;
    }
    Ok(())
}

fn show_roster<W: Write>(registry: &Registry, code: &CourseCode, out: &mut W) -> io::Result<()> {
    match registry.roster_of(code) {
        Ok(students) if students.is_empty() => writeln!(out, "No students registered in {code}."),
        Ok(students) => {
            for student in students {
                writeln!(out, "{student}")?;
            }
            Ok(())
        }
        Err(err) => writeln!(out, "{err}"),
    }
}

fn register<W: Write>(
    registry: &mut Registry,
    student: &StudentId,
    code: &CourseCode,
    out: &mut W,
) -> io::Result<()> {
    let result = registry.register_student_to_course(student, code);
    writeln!(out, "{}", register_message(code, &result))?;
    verify(registry);
    Ok(())
}

fn drop_course<W: Write>(
    registry: &mut Registry,
    student: &StudentId,
    code: &CourseCode,
    out: &mut W,
) -> io::Result<()> {
    let result = registry.remove_student_from_course(student, code);
    writeln!(out, "{}", drop_message(&result))?;
    verify(registry);
    Ok(())
}

fn verify(registry: &Registry) {
    if let Err(err) = registry.check_consistency() {
        tracing::error!(error = %err, "registry invariant violated");
    }
}
