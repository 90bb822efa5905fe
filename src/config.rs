//! Mechanism for loading the demonstration scenario's configuration

use crate::Result;

use eyre::{ensure, eyre, WrapErr};
use quadrivectors::{numeric::Float, VelocityVector};

use std::{fs::File, io::Read, str::FromStr};

/// Scenario configuration
#[derive(Debug)]
pub struct Configuration {
    /// Particle velocity, as fractions of light speed along each axis
    pub beta: [Float; 3],

    /// Rest mass of the massive particle (kg)
    pub mass: Float,

    /// Wavelength of the photon (m)
    pub wavelength: Float,

    /// Whether the configuration should be echoed on stdout
    print_config: bool,
}
//
impl Configuration {
    /// Load the configuration from a file, check it, and print it out
    pub fn load(file_name: &str) -> Result<Self> {
        // Read out the configuration file or die trying.
        let config_str = {
            let mut config_file = File::open(file_name)?;
            let mut buffer = String::new();
            config_file.read_to_string(&mut buffer)?;
            buffer
        };

        // We will iterate over the configuration items. These should be the
        // first non-whitespace chunk of text on each line, anything after it
        // being a comment. We will ignore blank lines.
        let mut config_iter = config_str
            .lines()
            .filter_map(|line| line.split_whitespace().next());

        // This closure fetches the next configuration item, tagging it with
        // the name of the configuration field which it is supposed to fill to
        // ease error reporting, and handling unexpected end-of-file too.
        let mut next_item = |name: &'static str| -> Result<ConfigItem> {
            config_iter
                .next()
                .map(|data| ConfigItem::new(name, data))
                .ok_or_else(|| eyre!("Missing configuration of {}", name))
        };

        // Decode the configuration items into concrete values
        let config = Configuration {
            beta: [
                next_item("vx_fraction")?.parse::<Float>()?,
                next_item("vy_fraction")?.parse::<Float>()?,
                next_item("vz_fraction")?.parse::<Float>()?,
            ],
            mass: next_item("mass")?.parse::<Float>()?,
            wavelength: next_item("wavelength")?.parse::<Float>()?,
            print_config: next_item("print_config")?.parse_bool()?,
        };

        // Display it if requested
        if config.print_config {
            config.print();
        }

        // A massive particle cannot reach light speed
        let beta2 = config.beta.iter().map(|b| b.powi(2)).sum::<Float>();
        ensure!(
            beta2 < 1.,
            "The particle must move slower than light, but β = {}",
            beta2.sqrt()
        );

        // Masses and wavelengths must be physical
        ensure!(config.mass > 0., "Rest mass must be positive");
        ensure!(config.wavelength > 0., "Photon wavelength must be positive");

        // If nothing bad occured, we can now return the configuration
        Ok(config)
    }

    /// Velocity of the massive particle (m/s)
    pub fn velocity(&self) -> VelocityVector {
        let [bx, by, bz] = self.beta;
        VelocityVector::from_beta(bx, by, bz)
    }

    /// Display the configuration
    pub fn print(&self) {
        println!("VX/C           : {}", self.beta[0]);
        println!("VY/C           : {}", self.beta[1]);
        println!("VZ/C           : {}", self.beta[2]);
        println!("MASS     (kg)  : {}", self.mass);
        println!("LAMBDA   (m)   : {}", self.wavelength);
        println!("PRINT_CONFIG   : {}", self.print_config);
    }
}

/// A value from the configuration file, tagged with the struct field which it
/// is supposed to map for error reporting purposes.
struct ConfigItem<'data> {
    name: &'static str,
    data: &'data str,
}
//
impl<'data> ConfigItem<'data> {
    /// Build a config item from a struct field tag and raw iterator data
    fn new(name: &'static str, data: &'data str) -> Self {
        Self { name, data }
    }

    /// Parse this data using Rust's standard parsing logic
    fn parse<T: FromStr>(self) -> Result<T>
    where
        <T as FromStr>::Err: ::std::error::Error + Send + Sync + 'static,
    {
        self.data
            .parse::<T>()
            .wrap_err_with(|| format!("Could not parse configuration of {}", self.name))
    }

    /// Parse this data using special logic which handles Fortran's bool syntax
    fn parse_bool(self) -> Result<bool> {
        match self.data.to_lowercase().as_str() {
            // Handle FORTRAN booleans as a special case
            ".true." => Ok(true),
            ".false." => Ok(false),
            // Delegate other booleans to the standard Rust parser
            _ => self.parse::<bool>(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{env, fs, process};

    /// Write a configuration file in the temporary directory and load it
    fn load_str(tag: &str, contents: &str) -> Result<Configuration> {
        let path = env::temp_dir().join(format!("quadrivectors-{}-{}", process::id(), tag));
        fs::write(&path, contents)?;
        let result = Configuration::load(path.to_str().expect("temporary path is not UTF-8"));
        fs::remove_file(&path)?;
        result
    }

    #[test]
    fn valid_configuration() {
        let cfg = load_str(
            "valid",
            "0.1111111111111111   vx/c\n\
             0.5                  vy/c\n\n\
             0.25                 vz/c\n\
             2                    mass (kg)\n\
             800e-9               wavelength (m)\n\
             .FALSE.              print_config\n",
        )
        .unwrap();
        assert_eq!(cfg.beta, [0.1111111111111111, 0.5, 0.25]);
        assert_eq!(cfg.mass, 2.);
        assert_eq!(cfg.wavelength, 800e-9);
        assert!(!cfg.print_config);
        assert_eq!(cfg.velocity(), VelocityVector::from_beta(0.1111111111111111, 0.5, 0.25));
    }

    #[test]
    fn missing_item() {
        let err = load_str("missing", "0.1\n0.2\n0.3\n2\n").unwrap_err();
        assert!(err.to_string().contains("wavelength"));
    }

    #[test]
    fn unparseable_item() {
        let err = load_str("unparseable", "0.1\n0.2\nfast\n2\n1e-6\nfalse\n").unwrap_err();
        assert!(err.to_string().contains("vz_fraction"));
    }

    #[test]
    fn superluminal_particle() {
        assert!(load_str("superluminal", "0.8\n0.8\n0\n2\n1e-6\nfalse\n").is_err());
    }
}
