//! Text-menu front end. Reads whitespace-delimited tokens, calls into
//! [`FileOps`] and renders the outcomes. Screens never call each other;
//! each returns the next [`Screen`] to [`Shell::run`].

use crate::{
    config::{App, Config},
    context::DirectoryContext,
    errors::AppError,
    security::ALLOWED_EXTENSIONS,
    tools::{display_name, CreateOutcome, DeleteOutcome, FileOps},
};
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Splits input into whitespace-separated tokens, one line at a time.
pub struct TokenReader<R> {
    input: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(input: R) -> Self {
        Self { input, pending: VecDeque::new() }
    }

    /// `None` once the input is exhausted.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Menu {
    Main,
    Sub,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    ChooseDirectory,
    ChangeDirectory,
    MainMenu,
    SubMenu,
    Continue(Menu),
    Exit,
}

pub struct Shell<R, W> {
    tokens: TokenReader<R>,
    out: W,
    ctx: DirectoryContext,
    ops: FileOps,
    app: App,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(cfg: &Config, ctx: DirectoryContext, input: R, out: W) -> Self {
        Self { tokens: TokenReader::new(input), out, ctx, ops: FileOps::new(cfg), app: cfg.app.clone() }
    }

    /// Runs until the user exits or the input ends.
    pub fn run(&mut self, start: Screen) -> io::Result<()> {
        self.banner()?;
        let mut screen = start;
        loop {
            let next = match screen {
                Screen::ChooseDirectory => self.choose_directory()?,
                Screen::ChangeDirectory => self.change_directory()?,
                Screen::MainMenu => self.main_menu()?,
                Screen::SubMenu => self.sub_menu()?,
                Screen::Continue(menu) => self.continue_prompt(menu)?,
                Screen::Exit => {
                    writeln!(self.out, "Thank you for using the application.")?;
                    return Ok(());
                }
            };
            match next {
                Some(s) => screen = s,
                None => {
                    tracing::info!("input closed");
                    return Ok(());
                }
            }
        }
    }

    fn banner(&mut self) -> io::Result<()> {
        writeln!(self.out, "Welcome to {}", self.app.company)?;
        writeln!(self.out, "Application Name : {}.com", self.app.name)?;
        if let Some(dev) = &self.app.developer {
            writeln!(self.out, "Developer Details: {dev}")?;
        }
        writeln!(
            self.out,
            "This application will help you to access your files and directories easily. \
             Please read the instructions carefully and enter appropriate inputs: \n"
        )
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        writeln!(self.out, "{text}")?;
        self.out.flush()?;
        self.tokens.next_token()
    }

    // Menus end the complaint with a period, yes/no questions do not.
    fn invalid(&mut self, on_menu: bool) -> io::Result<()> {
        let stop = if on_menu { "." } else { "" };
        writeln!(self.out, "Please enter valid input{stop}")
    }

    fn choose_directory(&mut self) -> io::Result<Option<Screen>> {
        let Some(answer) = self.prompt(
            "Enter 'Y' if you want to perform all the file operations in the default directory \
             or Enter 'N' if you want to specify a different directory",
        )?
        else {
            return Ok(None);
        };
        let next = match answer.to_ascii_lowercase().as_str() {
            "y" => {
                self.ctx.reset_to_default();
                Screen::MainMenu
            }
            "n" => Screen::ChangeDirectory,
            _ => {
                self.invalid(false)?;
                Screen::ChooseDirectory
            }
        };
        Ok(Some(next))
    }

    fn change_directory(&mut self) -> io::Result<Option<Screen>> {
        let Some(path) = self.prompt("Please enter the directory path")? else {
            return Ok(None);
        };
        let next = match self.ctx.set_root(Path::new(&path)) {
            Ok(()) => {
                writeln!(self.out, "Directory path changed to {}", self.ctx.current().display())?;
                Screen::MainMenu
            }
            Err(AppError::NotADirectory(_)) => {
                writeln!(self.out, "{path} is not a directory")?;
                Screen::ChooseDirectory
            }
            Err(e) => {
                writeln!(self.out, "Unable to change path. {e}")?;
                Screen::ChooseDirectory
            }
        };
        Ok(Some(next))
    }

    fn main_menu(&mut self) -> io::Result<Option<Screen>> {
        let Some(choice) = self.prompt(
            "Main Menu :\n\
             Press '1' to List the files in ascending order.\n\
             Press '2' to Perform other operations from the Sub-Menu. \n\
             Press '3' to Change the directory path\n\
             Press '4' to Exit the application.",
        )?
        else {
            return Ok(None);
        };
        let next = match choice.as_str() {
            "1" => {
                self.list()?;
                Screen::Continue(Menu::Main)
            }
            "2" => Screen::SubMenu,
            "3" => Screen::ChangeDirectory,
            "4" => Screen::Exit,
            _ => {
                self.invalid(true)?;
                Screen::MainMenu
            }
        };
        Ok(Some(next))
    }

    fn sub_menu(&mut self) -> io::Result<Option<Screen>> {
        let Some(choice) = self.prompt(
            "Sub Menu: \n\
             Enter 'a' to Add a new file.\n\
             Enter 'b' to Delete an exisitng file.\n\
             Enter 'c' for Searching the file.\n\
             Enter 'd' to Go back to the Main Menu.\n\
             Enter 'e' to Exit the application.",
        )?
        else {
            return Ok(None);
        };
        let done = match choice.to_ascii_lowercase().as_str() {
            "a" => self.add()?,
            "b" => self.delete()?,
            "c" => self.search()?,
            "d" => return Ok(Some(Screen::MainMenu)),
            "e" => return Ok(Some(Screen::Exit)),
            _ => {
                self.invalid(true)?;
                return Ok(Some(Screen::SubMenu));
            }
        };
        Ok(done.then_some(Screen::Continue(Menu::Sub)))
    }

    fn continue_prompt(&mut self, menu: Menu) -> io::Result<Option<Screen>> {
        let Some(answer) = self.prompt("Do you want to continue with the application? Enter 'Y' or 'N'.")? else {
            return Ok(None);
        };
        let next = match (answer.to_ascii_lowercase().as_str(), menu) {
            ("y", Menu::Main) => Screen::MainMenu,
            ("y", Menu::Sub) => Screen::SubMenu,
            ("n", _) => Screen::Exit,
            _ => {
                self.invalid(false)?;
                Screen::Continue(menu)
            }
        };
        Ok(Some(next))
    }

    fn list(&mut self) -> io::Result<()> {
        match self.ops.list_entries(&self.ctx) {
            Ok(entries) if entries.is_empty() => writeln!(self.out, "Folder is empty"),
            Ok(entries) => {
                writeln!(
                    self.out,
                    "Listing the files & folders located in {} in ascending order:",
                    self.ctx.current().display()
                )?;
                for name in entries {
                    writeln!(self.out, "{name}")?;
                }
                Ok(())
            }
            Err(AppError::NotADirectory(p)) => writeln!(self.out, "{} is not a directory", p.display()),
            Err(e) => writeln!(self.out, "Unable to list the files. {e}"),
        }
    }

    // The three file actions return false when the input ended mid-prompt.

    fn add(&mut self) -> io::Result<bool> {
        let Some(name) = self.prompt("Please enter the file name along with the extension. Eg: demo.txt")? else {
            return Ok(false);
        };
        let shown = display_name(&name);
        match self.ops.create_file(&self.ctx, &name) {
            Ok(CreateOutcome::Created(_)) => writeln!(self.out, "New File {shown} is created.")?,
            Ok(CreateOutcome::AlreadyExists(_)) => writeln!(self.out, "The file already exists.")?,
            Err(AppError::InvalidExtension(_)) => {
                let quoted: Vec<String> = ALLOWED_EXTENSIONS.iter().map(|e| format!("'{e}'")).collect();
                writeln!(self.out, "Please check the extension of the file. ")?;
                writeln!(self.out, "Currently we support only {} files. ", quoted.join(","))?;
                writeln!(self.out, "All other extensions will be supported in the next version.")?;
            }
            Err(AppError::PathEscape) => writeln!(
                self.out,
                "Unable to create a new file. {shown} is outside {}",
                self.ctx.current().display()
            )?,
            Err(e) => writeln!(self.out, "Unable to create a new file. {e}")?,
        }
        Ok(true)
    }

    fn delete(&mut self) -> io::Result<bool> {
        let Some(name) = self.prompt("Please enter the file name")? else {
            return Ok(false);
        };
        let shown = display_name(&name);
        match self.ops.delete_file(&self.ctx, &name) {
            Ok(DeleteOutcome::Deleted(_)) => writeln!(self.out, "{shown} deleted successfully.")?,
            Ok(DeleteOutcome::NotFound) => writeln!(self.out, "File {shown} not found")?,
            Err(e) => writeln!(self.out, "Unable to delete the file. {e}")?,
        }
        Ok(true)
    }

    fn search(&mut self) -> io::Result<bool> {
        let Some(name) = self.prompt("Enter the file name")? else {
            return Ok(false);
        };
        let shown = display_name(&name);
        match self.ops.search_file(&self.ctx, &name) {
            Ok(true) => writeln!(self.out, "File {shown} exists")?,
            Ok(false) => writeln!(self.out, "File {shown} does not exist")?,
            Err(e) => writeln!(self.out, "Unable to search the file. {e}")?,
        }
        Ok(true)
    }
}
