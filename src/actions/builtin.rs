// src/actions/builtin.rs - die globalen Funktionen der Seite
use super::action::Action;
use crate::core::prelude::*;
use crate::dom::NodeId;
use crate::t;
use crate::ui::UiController;
use std::future::Future;
use std::pin::Pin;

type ActionFuture<'a> = Pin<Box<dyn Future<Output = Result<String>> + Send + 'a>>;

fn required<'a>(name: &str, arg: Option<&'a str>) -> Result<&'a str> {
    arg.ok_or_else(|| AppError::Validation(t!("action.missing_arg", name)))
}

fn outcome(changed: bool, done: String, name: &str) -> String {
    if changed {
        done
    } else {
        t!("action.unchanged", name)
    }
}

#[derive(Debug)]
pub struct ToggleMobileMenu;

impl Action for ToggleMobileMenu {
    fn name(&self) -> &'static str {
        "toggleMobileMenu"
    }

    fn description(&self) -> &'static str {
        "Open or close the navigation on small screens"
    }

    fn takes_argument(&self) -> bool {
        false
    }

    fn execute<'a>(
        &'a self,
        ui: &'a UiController,
        _arg: Option<&'a str>,
        _trigger: Option<NodeId>,
    ) -> ActionFuture<'a> {
        Box::pin(async move {
            ui.toggle_mobile_menu();
            Ok(t!("menu.toggled"))
        })
    }
}

#[derive(Debug)]
pub struct SwitchTab;

impl Action for SwitchTab {
    fn name(&self) -> &'static str {
        "switchTab"
    }

    fn description(&self) -> &'static str {
        "Show one tab of the enclosing tab group"
    }

    fn execute<'a>(
        &'a self,
        ui: &'a UiController,
        arg: Option<&'a str>,
        trigger: Option<NodeId>,
    ) -> ActionFuture<'a> {
        Box::pin(async move {
            let tab = required(self.name(), arg)?;
            let changed = ui.switch_tab(tab, trigger);
            Ok(outcome(changed, t!("tab.switched", tab), self.name()))
        })
    }
}

#[derive(Debug)]
pub struct SwitchRequirementsTab;

impl Action for SwitchRequirementsTab {
    fn name(&self) -> &'static str {
        "switchRequirementsTab"
    }

    fn description(&self) -> &'static str {
        "Alias of switchTab for the requirements group"
    }

    fn execute<'a>(
        &'a self,
        ui: &'a UiController,
        arg: Option<&'a str>,
        trigger: Option<NodeId>,
    ) -> ActionFuture<'a> {
        Box::pin(async move {
            let tab = required(self.name(), arg)?;
            let changed = ui.switch_requirements_tab(tab, trigger);
            Ok(outcome(changed, t!("tab.switched", tab), self.name()))
        })
    }
}

#[derive(Debug)]
pub struct SwitchInstallTab;

impl Action for SwitchInstallTab {
    fn name(&self) -> &'static str {
        "switchInstallTab"
    }

    fn description(&self) -> &'static str {
        "Alias of switchTab for the installation group"
    }

    fn execute<'a>(
        &'a self,
        ui: &'a UiController,
        arg: Option<&'a str>,
        trigger: Option<NodeId>,
    ) -> ActionFuture<'a> {
        Box::pin(async move {
            let tab = required(self.name(), arg)?;
            let changed = ui.switch_install_tab(tab, trigger);
            Ok(outcome(changed, t!("tab.switched", tab), self.name()))
        })
    }
}

#[derive(Debug)]
pub struct SwitchLanguage;

impl Action for SwitchLanguage {
    fn name(&self) -> &'static str {
        "switchLanguage"
    }

    fn description(&self) -> &'static str {
        "Show the page in another language and remember the choice"
    }

    fn execute<'a>(
        &'a self,
        ui: &'a UiController,
        arg: Option<&'a str>,
        _trigger: Option<NodeId>,
    ) -> ActionFuture<'a> {
        Box::pin(async move {
            let lang = required(self.name(), arg)?;
            ui.switch_language(lang);
            Ok(t!("language.switched", lang))
        })
    }
}

#[derive(Debug)]
pub struct CopyBitcoinAddress;

impl Action for CopyBitcoinAddress {
    fn name(&self) -> &'static str {
        "copyBitcoinAddress"
    }

    fn description(&self) -> &'static str {
        "Copy the donation address"
    }

    fn execute<'a>(
        &'a self,
        ui: &'a UiController,
        arg: Option<&'a str>,
        _trigger: Option<NodeId>,
    ) -> ActionFuture<'a> {
        Box::pin(async move {
            let lang = required(self.name(), arg)?;
            let copied = ui.copy_bitcoin_address(lang).await;
            Ok(outcome(copied, t!("copy.success", "Bitcoin"), self.name()))
        })
    }
}

#[derive(Debug)]
pub struct CopyOneliner;

impl Action for CopyOneliner {
    fn name(&self) -> &'static str {
        "copyOneliner"
    }

    fn description(&self) -> &'static str {
        "Copy the install one-liner"
    }

    fn execute<'a>(
        &'a self,
        ui: &'a UiController,
        arg: Option<&'a str>,
        _trigger: Option<NodeId>,
    ) -> ActionFuture<'a> {
        Box::pin(async move {
            let lang = required(self.name(), arg)?;
            let copied = ui.copy_oneliner(lang).await;
            Ok(outcome(copied, t!("copy.success", "one-liner"), self.name()))
        })
    }
}
