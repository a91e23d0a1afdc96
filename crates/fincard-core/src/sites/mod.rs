use crate::config::SiteConfig;
use crate::error::ConfigError;

/// Brazilian stocks, REITs and ETFs, plus global ETFs, from [Investidor10].
///
/// [Investidor10]: https://investidor10.com.br
pub mod investidor_10;
/// Brazilian REITs from [StatusInvest].
///
/// [StatusInvest]: https://statusinvest.com.br
pub mod status_invest;

/// Names accepted by [`builtin`].
pub const BUILTIN_SITES: [&str; 5] = [
    "investidor10-stocks",
    "investidor10-reits",
    "investidor10-etfs-br",
    "investidor10-etfs",
    "statusinvest-reits",
];

/// Look up one of the site configurations shipped with the crate.
pub fn builtin(name: &str) -> Result<SiteConfig, ConfigError> {
    match name.trim().to_lowercase().as_str() {
        "investidor10-stocks" => Ok(investidor_10::stocks()),
        "investidor10-reits" => Ok(investidor_10::reits()),
        "investidor10-etfs-br" => Ok(investidor_10::etfs_br()),
        "investidor10-etfs" => Ok(investidor_10::etfs()),
        "statusinvest-reits" => Ok(status_invest::reits()),
        _ => Err(ConfigError::UnknownSite(name.to_string())),
    }
}

//////////////////////////////////////////////////////////////
// -- TESTS --
//////////////////////////////////////////////////////////////

#[test]
fn builtin_sites_are_valid() {
    for name in BUILTIN_SITES {
        let site = builtin(name).expect("builtin site");
        assert_eq!(site.name, name);
        site.validate().expect("builtin site validates");

        // every view column is part of the final table
        let table = site.table.names();
        for view in &site.views {
            for column in &view.columns {
                assert!(table.contains(&column.as_str()), "{name}: {column}");
            }
        }
    }
}

#[test]
fn scaled_etf_market_value() {
    for (name, column) in [
        ("investidor10-etfs-br", "VALOR DE MERCADO"),
        ("investidor10-etfs", "VALOR DE MERCADO USD"),
    ] {
        let site = builtin(name).expect("builtin site");
        let kpi = site.view("kpi").expect("kpi view");
        assert_eq!(kpi.groups.letter_scaled_columns, vec![column], "{name}");
    }
}

#[test]
fn lookup_ignores_case_and_padding() {
    let site = builtin("  StatusInvest-REITs ").expect("builtin site");
    assert_eq!(site.name, "statusinvest-reits");
    assert_eq!(
        site.view("info").expect("info view").groups.date_columns,
        vec!["DATA DE CRIAÇÃO"]
    );
}

#[test]
fn unknown_site() {
    assert!(matches!(
        builtin("nowhere"),
        Err(ConfigError::UnknownSite(site)) if site == "nowhere"
    ));
}
