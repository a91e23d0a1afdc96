use chrono::NaiveDate;
use fincard_core::pipeline::{run_asset, run_batch, ScrapedAssets};
use fincard_core::sites;
use fincard_core::{PipelineError, Value, NO_INFORMATION};

// Full runs of the builtin Investidor10 configurations over scraped pages.

fn scraped() -> ScrapedAssets {
    serde_json::from_str(include_str!("../benches/files/assets.json")).expect("scraped assets")
}

#[test]
fn stock_page() {
    let time = std::time::Instant::now();
    let site = sites::builtin("investidor10-stocks").unwrap();
    let assets = scraped();
    let rows = run_asset(&site, &assets.assets[0]).unwrap();
    println!("RUN ASSET: {:?}s", time.elapsed().as_secs_f64());

    let table = &rows.table;
    assert_eq!(table.len(), site.table.len());

    // -- INFO --
    assert_eq!(table.get("TICKET"), Some(&Value::from("ABCD3")));
    assert_eq!(table.get("EMPRESA"), Some(&Value::from("BANCO EXEMPLO S.A.")));
    assert_eq!(table.get("ANO IPO"), Some(&Value::from("1997")));
    assert_eq!(table.get("SETOR"), Some(&Value::from("FINANCEIRO")));

    // -- PRICE --
    assert_eq!(table.get("MOEDA"), Some(&Value::from("BRL")));
    assert_eq!(table.get("COTAÇÃO"), Some(&Value::Number(12.34)));
    assert_eq!(
        table.get("VARIAÇÃO DE COTAÇÃO 1 ANO"),
        Some(&Value::Number(-4.5))
    );

    // -- KPI --
    assert_eq!(table.get("P/L"), Some(&Value::Number(7.85)));
    assert_eq!(table.get("DIVIDEND YIELD"), Some(&Value::Number(8.1)));
    assert_eq!(table.get("PAYOUT"), Some(&Value::Number(45.3)));
    assert_eq!(
        table.get("QUANTIDADE DE PAPÉIS"),
        Some(&Value::Number(1_234_567_890.0))
    );
    assert_eq!(table.get("TAG ALONG"), Some(&Value::Number(100.0)));
    // "-" and empty cards carry no value
    assert_eq!(table.get("MARGEM LÍQUIDA"), Some(&Value::Null));
    assert_eq!(table.get("VALOR DE MERCADO"), Some(&Value::Null));
    // never scraped
    assert_eq!(table.get("ROIC"), Some(&Value::Null));

    // views keep their own coercions
    let kpi = rows.view("kpi").unwrap();
    assert_eq!(kpi.get("DIVIDEND YIELD"), Some(&Value::from("8.10%")));

    // -- PAYMENTS --
    assert_eq!(rows.payments.len(), 2);
    assert_eq!(rows.payments[0].pay_date, NaiveDate::from_ymd_opt(2024, 6, 13));
    assert_eq!(rows.payments[1].kind, "JSCP");

    // -- DISPLAY --
    let display = rows.to_display();
    assert_eq!(display.table.get("ROIC"), Some(&Value::from(NO_INFORMATION)));
    assert_eq!(display.table.get("COTAÇÃO"), Some(&Value::Number(12.34)));
}

#[test]
fn stock_page_without_kpis() {
    let site = sites::builtin("investidor10-stocks").unwrap();
    let mut assets = scraped();
    assets.assets[0].views.remove("kpi");

    let results = run_batch(&site, &assets.assets, 1, |_| {});
    match &results[0] {
        Err(PipelineError::EmptySection { view }) => assert_eq!(view, "kpi"),
        other => panic!("expected an empty kpi section, got {other:?}"),
    }
}

#[test]
fn reit_page() {
    let site = sites::builtin("investidor10-reits").unwrap();
    let assets: ScrapedAssets = serde_json::from_value(serde_json::json!({
        "assets": [{
            "ticker": "WXYZ11",
            "views": {
                "info": [[
                    { "label": "TICKET", "value": "WXYZ11" },
                    { "label": "RAZÃO SOCIAL", "value": "Fundo Exemplo Imobiliário" },
                    { "label": "TIPO DE FUNDO", "value": "Fundo de papel" },
                    { "label": "TAXA DE ADMINISTRAÇÃO", "value": "1,00% a.a" }
                ]],
                "price": [[
                    { "label": "TICKET", "value": "WXYZ11" },
                    { "label": "MOEDA", "value": "BRL" },
                    { "label": "COTAÇÃO", "value": "R$ 98,76" },
                    { "label": "ÚLTIMO RENDIMENTO", "value": "R$ 1,05" }
                ]],
                "kpi": [[
                    { "label": "TICKET", "value": "WXYZ11" },
                    { "label": "VALOR PATRIMONIAL", "value": "R$ 1,5 Bilhões" },
                    { "label": "VAL. PATRIMONIAL P/ COTA", "value": "R$ 101,20" },
                    { "label": "LIQUIDEZ DIÁRIA", "value": "R$ 2,5 M" },
                    { "label": "DY CAGR(3 ANOS) 2021-2024", "value": "4,2%" }
                ]]
            }
        }]
    }))
    .unwrap();

    let rows = run_asset(&site, &assets.assets[0]).unwrap();
    let table = &rows.table;

    assert_eq!(table.get("TICKET"), Some(&Value::from("WXYZ11")));
    assert_eq!(
        table.get("NOME"),
        Some(&Value::from("FUNDO EXEMPLO IMOBILIÁRIO"))
    );
    assert_eq!(table.get("SETOR"), Some(&Value::from("FUNDO DE PAPEL")));
    assert_eq!(table.get("COTAÇÃO"), Some(&Value::Number(98.76)));
    assert_eq!(table.get("VALOR PATRIMONIAL"), Some(&Value::Number(1_500_000_000.0)));
    assert_eq!(table.get("VALOR PATRIMONIAL/COTA"), Some(&Value::Number(101.2)));
    assert_eq!(table.get("LIQUIDEZ"), Some(&Value::Number(2_500_000.0)));
}

#[test]
fn brazilian_etf_page() {
    let site = sites::builtin("investidor10-etfs-br").unwrap();
    let assets: ScrapedAssets = serde_json::from_value(serde_json::json!({
        "assets": [{
            "ticker": "BOVA11",
            "views": {
                "info": [[
                    { "label": "TICKET", "value": "BOVA11" },
                    { "label": "NOME", "value": "ISHARES IBOVESPA" }
                ]],
                "price": [[
                    { "label": "TICKET", "value": "BOVA11" },
                    { "label": "MOEDA", "value": "BRL" },
                    { "label": "COTAÇÃO", "value": "R$ 101,50" },
                    { "label": "VARIAÇÃO (12M)", "value": "-3,1 ARROW_DOWNWARD%" },
                    { "label": "VARIAÇÃO (60N)", "value": "45,2%" }
                ]],
                "kpi": [[
                    { "label": "TICKET", "value": "BOVA11" },
                    { "label": "CAPITALIZAÇÃO", "value": "R$\n1,5 B" },
                    { "label": "LIQUIDEZ", "value": "1.234,56" },
                    { "label": "DY", "value": "0,00%" }
                ]]
            }
        }]
    }))
    .unwrap();

    let rows = run_asset(&site, &assets.assets[0]).unwrap();
    let table = &rows.table;

    assert_eq!(table.get("NOME").and_then(Value::as_text), Some("ISHARES IBOVESPA"));
    assert_eq!(table.get("COTAÇÃO").and_then(Value::as_number), Some(101.5));
    assert_eq!(
        table.get("VARIAÇÃO DE COTAÇÃO 1 ANO").and_then(Value::as_number),
        Some(-3.1)
    );
    assert_eq!(
        table.get("VARIAÇÃO DE COTAÇÃO 5 ANOS").and_then(Value::as_number),
        Some(45.2)
    );
    assert_eq!(
        table.get("VALOR DE MERCADO").and_then(Value::as_number),
        Some(1_500_000_000.0)
    );
    assert_eq!(table.get("LIQUIDEZ").and_then(Value::as_number), Some(1234.56));
    // a zero yield carries no value
    assert_eq!(table.get("DIVIDEND YIELD"), Some(&Value::Null));
}

#[test]
fn global_etf_page() {
    let site = sites::builtin("investidor10-etfs").unwrap();
    let assets: ScrapedAssets = serde_json::from_value(serde_json::json!({
        "assets": [{
            "ticker": "VOO",
            "views": {
                "info": [[
                    { "label": "TICKET", "value": "VOO" },
                    { "label": "NOME", "value": "VANGUARD S&P 500 ETF" },
                    { "label": "MOEDA", "value": "USD" }
                ]],
                "price": [[
                    { "label": "TICKET", "value": "VOO" },
                    { "label": "MOEDA", "value": "USD" },
                    { "label": "COTAÇÃO BRL", "value": "R$ 2.512,30" },
                    { "label": "COTAÇÃO", "value": "US$ 455,10" },
                    { "label": "VARIAÇÃO (12M)", "value": "24,3%" }
                ]],
                "kpi": [[
                    { "label": "TICKET", "value": "VOO" },
                    { "label": "MOEDA", "value": "USD" },
                    { "label": "CAPITALIZAÇÃO", "value": "US$\n410,2 B" },
                    { "label": "LIQUIDEZ USD", "value": "2.100.000" },
                    { "label": "DY", "value": "1,3%" }
                ]]
            }
        }]
    }))
    .unwrap();

    let rows = run_asset(&site, &assets.assets[0]).unwrap();
    let table = &rows.table;

    assert_eq!(table.get("MOEDA").and_then(Value::as_text), Some("USD"));
    assert_eq!(table.get("COTAÇÃO BRL").and_then(Value::as_number), Some(2512.3));
    assert_eq!(table.get("COTAÇÃO USD").and_then(Value::as_number), Some(455.1));
    assert!(!table.contains("COTAÇÃO"));
    assert_eq!(
        table.get("VALOR DE MERCADO USD").and_then(Value::as_number),
        Some(410_200_000_000.0)
    );
    assert_eq!(
        table.get("LIQUIDEZ USD").and_then(Value::as_number),
        Some(2_100_000.0)
    );
    assert_eq!(table.get("DIVIDEND YIELD").and_then(Value::as_number), Some(1.3));
    assert_eq!(
        table.get("VARIAÇÃO DE COTAÇÃO USD 5 ANOS"),
        Some(&Value::Null)
    );
}
