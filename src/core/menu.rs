use crate::core::registry::PackageRegistry;
use crate::domain::model::{Package, ServiceTier};
use crate::domain::ports::Console;
use crate::utils::error::Result;

/// Interactive menu driver, generic over its console so the whole
/// session can run against scripted input in tests.
pub struct MenuSession<C: Console> {
    registry: PackageRegistry,
    console: C,
}

impl<C: Console> MenuSession<C> {
    pub fn new(registry: PackageRegistry, console: C) -> Self {
        Self { registry, console }
    }

    /// Runs the menu loop until the user exits or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu();
            let Some(choice) = self.console.read_line("Enter your choice: ")? else {
                tracing::debug!("End of input, closing session");
                break;
            };

            match choice.trim() {
                "1" => {
                    if !self.add_package()? {
                        break;
                    }
                }
                "2" => self.display_packages(),
                "3" => {
                    self.console.write_line("Sorting packages by weight...");
                    self.registry.sort_by_weight();
                    self.display_packages();
                }
                "4" => {
                    if !self.search_package()? {
                        break;
                    }
                }
                "5" => {
                    self.console
                        .write_line("Thank you for using Courier Desk!");
                    break;
                }
                _ => self
                    .console
                    .write_line("Invalid choice! Please try again."),
            }
        }
        Ok(())
    }

    pub fn registry(&self) -> &PackageRegistry {
        &self.registry
    }

    fn print_menu(&mut self) {
        self.console.write_line("===============================");
        self.console.write_line("      Courier Desk");
        self.console.write_line("===============================");
        self.console.write_line("1. Add a new package");
        self.console
            .write_line("2. Display all packages and shipping costs");
        self.console.write_line("3. Sort packages by weight");
        self.console
            .write_line("4. Search for a package by tracking ID");
        self.console.write_line("5. Exit");
    }

    /// Returns false when input ended mid-prompt.
    fn add_package(&mut self) -> Result<bool> {
        let Some(tier_input) = self
            .console
            .read_line("Enter package type (Standard/Express): ")?
        else {
            return Ok(false);
        };
        let tier: ServiceTier = match tier_input.parse() {
            Ok(tier) => tier,
            Err(e) => {
                self.console.write_line(&format!("Error: {e}"));
                return Ok(true);
            }
        };

        let Some(tracking_id) = self.console.read_line("Enter tracking ID: ")? else {
            return Ok(false);
        };
        let Some(destination) = self.console.read_line("Enter destination: ")? else {
            return Ok(false);
        };
        let Some(weight_input) = self.console.read_line("Enter weight: ")? else {
            return Ok(false);
        };
        let weight: f64 = match weight_input.trim().parse() {
            Ok(weight) => weight,
            Err(_) => {
                self.console
                    .write_line("Error: weight must be a number.");
                return Ok(true);
            }
        };

        // A failed construction never produces a partial record and is
        // never added; the session just keeps going.
        match Package::new(tracking_id.trim(), destination.trim(), weight, tier) {
            Ok(package) => {
                tracing::info!("Added package {}", package.tracking_id());
                self.registry.add(package);
                self.console.write_line("Package added successfully!");
            }
            Err(e) => {
                tracing::warn!("Rejected package: {e}");
                self.console.write_line(&format!("Error: {e}"));
            }
        }
        Ok(true)
    }

    fn display_packages(&mut self) {
        if self.registry.is_empty() {
            self.console.write_line("No packages available.");
            return;
        }
        // Rendering only; ordering is whatever the registry holds.
        let lines: Vec<String> = self
            .registry
            .list_all()
            .iter()
            .map(|pkg| pkg.to_string())
            .collect();
        for line in lines {
            self.console.write_line(&line);
        }
    }

    fn search_package(&mut self) -> Result<bool> {
        let Some(tracking_id) = self.console.read_line("Enter tracking ID: ")? else {
            return Ok(false);
        };
        // A miss is a normal outcome of search, not an error.
        match self.registry.find_by_tracking_id(tracking_id.trim()) {
            Some(package) => {
                let line = format!("Package found: {package}");
                self.console.write_line(&line);
            }
            None => self
                .console
                .write_line("No package found with the given tracking ID."),
        }
        Ok(true)
    }
}
