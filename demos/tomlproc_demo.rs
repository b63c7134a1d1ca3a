// ------------------------------------------------------------------------------------------------
// tomlproc - TOML 1.0.0 processor
//
// Copyright (c) 2026, The tomlproc authors.
// All rights reserved.
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// * Redistributions of source code must retain the above copyright notice, this
//   list of conditions and the following disclaimer.
//
// * Redistributions in binary form must reproduce the above copyright notice,
//   this list of conditions and the following disclaimer in the documentation
//   and/or other materials provided with the distribution.
//
// * Neither the name of the copyright holder nor the names of its
//   contributors may be used to endorse or promote products derived from
//   this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
// OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
// ------------------------------------------------------------------------------------------------

//! Simple demo application showing API usage.

use tomlproc::*;

toml_record! {
    /// Application settings bound from the configuration below.
    pub struct AppConfig {
        name: String,
        workers: u16 = 4,
        debug: bool = false,
        listen: Vec<String> = Vec::new(),
    }
}

const CONFIG: &str = r#"
name = "demo"
workers = 8
listen = ["127.0.0.1:8080", "[::1]:8080"]

[limits]
cpu = 2
memory = 1024
"#;

pub fn main() {
    // parse into a value tree and read single values through the typed getters
    let document = match parse(CONFIG) {
        Ok(doc) => doc,
        Err(error) => {
            eprintln!("{}", error);
            return
        }
    };
    println!("name    = {:?}", get_string(document.root_table(), "name"));
    println!("workers = {:?}", get_int(document.root_table(), "workers"));
    println!("cpu     = {:?}",
             get_path(document.root_table(), "limits.cpu").map(|i| i.value().as_integer()));

    // check the document against a hand built schema
    let schema = Schema::new()
        .with_description("demo application settings")
        .allow_unknown()
        .with_field(FieldSchema::new("name", FieldType::String).required()
                        .with_constraint(Constraint::MinLength(1)))
        .with_field(FieldSchema::new("workers", FieldType::Integer)
                        .with_constraint(Constraint::MinValue(1))
                        .with_constraint(Constraint::MaxValue(64)));
    let result = validate(&schema, document.root_table());
    println!("valid   = {}", result.valid());
    for problem in result.errors() {
        println!("problem = {}", problem);
    }

    // bind the root table to a record generated by toml_record!
    match parse_into::<AppConfig>(CONFIG) {
        Ok(config) => println!("record  = {:?}", config),
        Err(error) => eprintln!("{}", error)
    }

    // re-serialize as TOML and as pretty JSON
    println!("--- TOML ---\n{}", stringify(&document));
    println!("--- JSON ---\n{}", to_json_pretty(&document, 2));

    // demonstrate the caret diagnostics
    let broken = parse_with_context("valid = true\nbroken key = 1\n");
    if let Some(context) = broken.error {
        print!("{}", context.render());
    }
}
