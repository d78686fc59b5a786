use colored::*;
use rustour_common::random;

const BANNER_0: &str = r#"
       ____   _   _  ____   _____   ___   _   _  ____
      |  _ \ | | | |/ ___| |_   _| / _ \ | | | ||  _ \
      | |_) || | | |\___ \   | |  | | | || | | || |_) |
      |  _ < | |_| | ___) |  | |  | |_| || |_| ||  _ <
      |_| \_\ \___/ |____/   |_|   \___/  \___/ |_| \_\
"#;

const BANNER_1: &str = r#"
            █▀█ █ █ █▀▀ ▀█▀ █▀█ █ █ █▀█
            █▀▄ █ █ ▀▀█  █  █ █ █ █ █▀▄
            ▀ ▀ ▀▀▀ ▀▀▀  ▀  ▀▀▀ ▀▀▀ ▀ ▀
"#;

const BANNER_2: &str = r#"
                ┬─┐┬ ┬┌─┐┌┬┐┌─┐┬ ┬┬─┐
                ├┬┘│ │└─┐ │ │ ││ │├┬┘
                ┴└─└─┘└─┘ ┴ └─┘└─┘┴└─
"#;

const BANNER_3: &str = r#"
                ╦═╗╦ ╦╔═╗╔╦╗╔═╗╦ ╦╦═╗
                ╠╦╝║ ║╚═╗ ║ ║ ║║ ║╠╦╝
                ╩╚═╚═╝╚═╝ ╩ ╚═╝╚═╝╩╚═
"#;

const BANNER_4: &str = r#"
           ####  #   #  #### #####  ###  #   # ####
           #   # #   # #       #   #   # #   # #   #
           ####  #   #  ###    #   #   # #   # ####
           #  #  #   #     #   #   #   # #   # #  #
           #   #  ###  ####    #    ###   ###  #   #
"#;

/// One of the art variants, drawn through the shared generator so that
/// `--seed` pins the banner along with the sample data.
pub fn print() {
    match random::random_int(0, 4) {
        0 => println!("{}", BANNER_0.red()),
        1 => println!("{}", BANNER_1.truecolor(255, 165, 0)),
        2 => println!("{}", BANNER_2.green()),
        3 => println!("{}", BANNER_3.blue()),
        _ => println!("{}", BANNER_4.truecolor(80, 80, 100)),
    }
}
