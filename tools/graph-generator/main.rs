use clap::Parser;
use rand::Rng;
use rand::rngs::ThreadRng;
use serde_json::{Value, json};
use std::fs;

/// A CLI tool to generate random canvas snapshots for exercising the generator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_canvas.json")]
    output: String,

    /// The number of functions to generate
    #[arg(long, default_value_t = 3)]
    functions: usize,

    /// The maximum statement chain length per function body
    #[arg(long, default_value_t = 5)]
    max_chain: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.max_chain == 0 {
        eprintln!("Error: --max-chain must be at least 1");
        std::process::exit(1);
    }

    println!(
        "Generating canvas snapshot ({} functions, chains up to {} statements)...",
        cli.functions, cli.max_chain
    );

    let mut nodes = Vec::new();
    let mut edges = Vec::new();

    nodes.push(node(&mut rng, "module-0", "module", json!({ "moduleName": "generated-contract" })));

    let globals = [
        (
            "constant",
            json!({ "name": "MAX_SUPPLY", "value": "u1000000" }),
        ),
        (
            "dataVariable",
            json!({ "name": "counter", "type": "uint", "initialValue": "u0" }),
        ),
        (
            "map",
            json!({ "name": "balances", "keyType": "{ id: uint }", "valueType": "{ value: bool }" }),
        ),
    ];
    for (index, (kind, data)) in globals.iter().enumerate() {
        let id = format!("global-{}", index);
        nodes.push(node(&mut rng, &id, kind, data.clone()));
        edges.push(edge("module-0", "out", &id));
    }

    for index in 0..cli.functions {
        let function_id = format!("fn-{}", index);
        let (kind, data) = random_function(&mut rng, index);
        nodes.push(node(&mut rng, &function_id, kind, data));
        edges.push(edge("module-0", "out", &function_id));

        let chain_len = rng.random_range(1..=cli.max_chain);
        let mut previous = function_id.clone();
        for step in 0..chain_len {
            let statement_id = format!("fn-{}-stmt-{}", index, step);
            let terminal = step + 1 == chain_len;
            let (kind, data) = random_statement(&mut rng, terminal);
            nodes.push(node(&mut rng, &statement_id, kind, data));
            edges.push(edge(&previous, "out", &statement_id));
            previous = statement_id;
        }
    }

    let snapshot = json!({ "nodes": nodes, "edges": edges });
    let json_output = serde_json::to_string_pretty(&snapshot)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved canvas snapshot to '{}'",
        cli.output
    );

    Ok(())
}

fn node(rng: &mut ThreadRng, id: &str, kind: &str, data: Value) -> Value {
    json!({
        "id": id,
        "type": kind,
        "data": data,
        "position": {
            "x": rng.random_range(0.0..1600.0),
            "y": rng.random_range(0.0..900.0),
        },
    })
}

fn edge(source: &str, handle: &str, target: &str) -> Value {
    json!({
        "source": source,
        "sourceHandle": handle,
        "target": target,
        "targetHandle": "in",
    })
}

fn random_function(rng: &mut ThreadRng, index: usize) -> (&'static str, Value) {
    match rng.random_range(0..3) {
        0 => (
            "publicFunction",
            json!({
                "name": format!("do-action-{}", index),
                "params": "amount uint, recipient principal",
                "returnType": "(response bool uint)",
            }),
        ),
        1 => (
            "readOnlyFunction",
            json!({ "name": format!("get-value-{}", index) }),
        ),
        _ => (
            "privateFunction",
            json!({ "name": format!("helper-{}", index), "params": "amount uint" }),
        ),
    }
}

fn random_statement(rng: &mut ThreadRng, terminal: bool) -> (&'static str, Value) {
    if terminal {
        return if rng.random_bool(0.8) {
            ("returnOk", json!({ "value": "true" }))
        } else {
            ("returnErr", json!({ "errorCode": "u100" }))
        };
    }

    match rng.random_range(0..5) {
        0 => (
            "assert",
            json!({ "condition": "(> amount u0)", "errorCode": "u1" }),
        ),
        1 => ("varGet", json!({ "varName": "counter" })),
        2 => (
            "varSet",
            json!({ "varName": "counter", "value": "(+ (var-get counter) u1)" }),
        ),
        3 => ("mapGet", json!({ "mapName": "balances", "key": "u1" })),
        _ => (
            "mapSet",
            json!({ "mapName": "balances", "key": "u1", "value": "true" }),
        ),
    }
}
