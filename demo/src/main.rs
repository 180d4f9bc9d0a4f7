use clap::{Parser, ValueEnum};
use paramcomb::factory::{from_domain, from_values};
use paramcomb::{combine, Combinations, Domain, ParameterTuple, ParametersExt};

mod logging;

use logging::{debug, info};

#[derive(Clone, Copy, Debug, Domain)]
enum AType {
    A1,
    A2,
    A3,
}

#[derive(Clone, Copy, Debug, Domain)]
enum BType {
    B1,
    B2,
    B3,
}

#[derive(Clone, Copy, Debug, Domain)]
enum CType {
    C1,
    C2,
    C3,
    C4,
    C5,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Scenario {
    All,
    Enums,
    Ints,
    Raw,
    Mixed,
    Filter,
}

/// Drive sample functions with every combination of their parameters.
#[derive(Debug, Parser)]
#[command(name = "paramcomb-demo", version)]
struct Args {
    #[arg(long, value_enum, default_value_t = Scenario::All)]
    scenario: Scenario,

    /// Product above which the filter scenario lists a combination
    #[arg(long, default_value_t = 1000)]
    threshold: i32,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn sample1(type1: AType, type2: BType, type3: CType) {
    println!("{type1:?} , {type2:?} , {type3:?} ");
}

fn sample2(val1: i32, val2: i32) {
    println!("{val1} * {val2} = {} ", val1 * val2);
}

fn sample3(val1: i32, val2: i32, type1: AType, type2: BType) {
    println!("{val1} * {val2} = {} : ({type1:?},{type2:?})", val1 * val2);
}

fn int_sources() -> [Vec<paramcomb::TaggedValue>; 2] {
    [from_values(5..15), from_values([99, 999, 9999])]
}

fn enums() -> paramcomb::Result<()> {
    let combinations = combine![
        from_domain::<AType>(),
        from_domain::<BType>(),
        from_domain::<CType>(),
    ]?;
    for parameters in combinations.iter().parameters() {
        sample1(
            parameters.get_value(0)?,
            parameters.get_value(1)?,
            parameters.get_value(2)?,
        );
    }
    println!("enums count = {}", combinations.len());
    Ok(())
}

fn ints() -> paramcomb::Result<()> {
    let [first, second] = int_sources();
    let combinations = combine![first, second]?;
    for parameters in combinations.iter().parameters() {
        sample2(parameters.get_value(0)?, parameters.get_value(1)?);
    }
    println!("ints count = {}", combinations.len());
    Ok(())
}

fn raw() -> paramcomb::Result<()> {
    let combinations = Combinations::from_raw([(5..15).collect(), vec![99, 999, 9999]])?;
    for parameters in combinations.iter().parameters() {
        let (val1, val2) = parameters.to_tuple()?;
        sample2(val1, val2);
    }
    println!("raw count = {}", combinations.len());
    Ok(())
}

fn mixed() -> paramcomb::Result<Combinations> {
    let [first, second] = int_sources();
    combine![
        first,
        second,
        from_domain::<AType>(),
        from_domain::<BType>(),
    ]
}

fn run_mixed() -> paramcomb::Result<()> {
    let combinations = mixed()?;
    for parameters in combinations.iter().parameters() {
        sample3(
            parameters.get_value(0)?,
            parameters.get_value(1)?,
            parameters.get_value(2)?,
            parameters.get_value(3)?,
        );
    }
    println!("mixed count = {}", combinations.len());
    Ok(())
}

fn filter(threshold: i32) -> paramcomb::Result<()> {
    let combinations = mixed()?;
    let mut selected: Vec<ParameterTuple> = Vec::new();
    for parameters in combinations.iter().lazy_parameters(Some(combinations.arity())) {
        let product = parameters.get_value::<i32>(0)? * parameters.get_value::<i32>(1)?;
        if product > threshold {
            selected.push(parameters);
        }
    }
    debug!("{} of {} combinations above {threshold}", selected.len(), combinations.len());
    for parameters in &selected {
        println!("{parameters}");
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logging::init_logging(args.verbose)?;
    info!("running {:?}", args.scenario);

    let all = args.scenario == Scenario::All;
    if all || args.scenario == Scenario::Enums {
        enums()?;
    }
    if all || args.scenario == Scenario::Ints {
        ints()?;
    }
    if all || args.scenario == Scenario::Raw {
        raw()?;
    }
    if all || args.scenario == Scenario::Mixed {
        run_mixed()?;
    }
    if all || args.scenario == Scenario::Filter {
        filter(args.threshold)?;
    }
    Ok(())
}
